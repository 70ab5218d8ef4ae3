use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{NewUser, RepoError, User, UserChanges};

/// Persistence operations on the `users` table.
///
/// Update and delete report success when no row matches the id.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, RepoError>;
    async fn create(&self, user: NewUser) -> Result<(), RepoError>;
    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), RepoError>;
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, description
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, description)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.description)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            UPDATE users
               SET name          = COALESCE($2, name),
                   email         = COALESCE($3, email),
                   password_hash = COALESCE($4, password_hash),
                   description   = COALESCE($5, description)
             WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.description)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, description
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
