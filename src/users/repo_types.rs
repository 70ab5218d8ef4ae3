use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub description: String,
}

/// Row to insert. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub description: String,
}

/// Fields to overwrite on update; `None` leaves the column as it is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),
    #[error("query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => RepoError::StoreUnavailable(e),
            _ => RepoError::QueryFailed(e),
        }
    }
}
