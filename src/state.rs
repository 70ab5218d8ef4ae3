use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::jwt::JwtKeys;
use crate::config::AppConfig;
use crate::users::repo::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn from_pool(db: PgPool, config: &AppConfig) -> Self {
        Self::from_parts(
            Arc::new(PgUserRepository::new(db)),
            JwtKeys::from(&config.jwt),
        )
    }

    pub fn from_parts(users: Arc<dyn UserRepository>, jwt: JwtKeys) -> Self {
        Self { users, jwt }
    }

    #[cfg(test)]
    pub fn fake() -> (Self, Arc<crate::users::memory::MemoryUserRepository>) {
        use std::time::Duration;

        let repo = Arc::new(crate::users::memory::MemoryUserRepository::new());
        let jwt = JwtKeys::new(b"test-secret", Duration::from_secs(3600));
        (Self::from_parts(repo.clone(), jwt), repo)
    }
}
