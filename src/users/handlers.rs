use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{CreateUserRequest, MessageResponse, UpdateUserRequest},
    repo_types::{NewUser, UserChanges},
};
use crate::{
    auth::{claims::Claims, dto::PublicUser, password::hash_password_async},
    error::AppError,
    state::AppState,
    validate::present,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route("/usuarios/:id", put(update_user).delete(delete_user))
}

#[instrument(skip(state, claims), fields(actor = claims.id))]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<PublicUser>>, AppError> {
    let users = state.users.list_all().await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

#[instrument(skip(state, claims, payload), fields(actor = claims.id))]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (Some(name), Some(email), Some(password)) = (
        present(payload.name),
        present(payload.email),
        present(payload.password),
    ) else {
        warn!("create user with missing fields");
        return Err(AppError::Validation("missing required fields"));
    };

    let password_hash = hash_password_async(password)
        .await
        .map_err(AppError::internal)?;

    state
        .users
        .create(NewUser {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password_hash,
            description: payload.description.unwrap_or_default(),
        })
        .await?;

    info!(email = %email.trim(), "user created");
    Ok((StatusCode::CREATED, Json(MessageResponse::new("user created"))))
}

/// Only the supplied fields change. A new password goes through the same hasher
/// as on create.
#[instrument(skip(state, claims, payload), fields(actor = claims.id))]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let password_hash = match present(payload.password) {
        Some(password) => Some(
            hash_password_async(password)
                .await
                .map_err(AppError::internal)?,
        ),
        None => None,
    };

    let changes = UserChanges {
        name: present(payload.name).map(|v| v.trim().to_owned()),
        email: present(payload.email).map(|v| v.trim().to_owned()),
        password_hash,
        description: payload.description,
    };
    state.users.update(id, changes).await?;

    info!(user_id = id, "user updated");
    Ok(Json(MessageResponse::new("user updated")))
}

/// Unknown ids are not an error; the row simply isn't there afterwards.
#[instrument(skip(state, claims), fields(actor = claims.id))]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.users.delete(id).await?;
    info!(user_id = id, "user deleted");
    Ok(Json(MessageResponse::new("user deleted")))
}
