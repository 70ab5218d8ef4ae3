use serde::{Deserialize, Serialize};

/// Body of `POST /usuarios`. Required fields are optional here and checked by the
/// handler, so a missing field is a 400 with a clear message.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "correo_electronico")]
    pub email: Option<String>,
    #[serde(rename = "contrasena")]
    pub password: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// Body of `PUT /usuarios/:id`; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "correo_electronico")]
    pub email: Option<String>,
    #[serde(rename = "contrasena")]
    pub password: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
