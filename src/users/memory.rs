//! In-memory `UserRepository` used by the router tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;

use super::repo::UserRepository;
use super::repo_types::{NewUser, RepoError, User, UserChanges};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
    offline: AtomicBool,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the store were down.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepoError::StoreUnavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn create(&self, user: NewUser) -> Result<(), RepoError> {
        self.check()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.users.lock().unwrap().push(User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            description: user.description,
        });
        Ok(())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), RepoError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = changes.name {
                user.name = name;
            }
            if let Some(email) = changes.email {
                user.email = email;
            }
            if let Some(hash) = changes.password_hash {
                user.password_hash = hash;
            }
            if let Some(description) = changes.description {
                user.description = description;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}
