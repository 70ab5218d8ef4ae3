use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Request body for login. Fields are optional so that a missing field is reported
/// as "missing login data" rather than a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "correo_electronico", default)]
    pub email: Option<String>,
    #[serde(rename = "contrasena", default)]
    pub password: Option<String>,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo_electronico")]
    pub email: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            description: u.description,
        }
    }
}
