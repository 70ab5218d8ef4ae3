use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        password::verify_password_async,
    },
    error::{AppError, LoginError},
    state::AppState,
    validate::{is_valid_email, non_empty},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, LoginError> {
    // The email is checked exactly as sent, surrounding whitespace included.
    let (Some(email), Some(password)) = (non_empty(payload.email), non_empty(payload.password))
    else {
        warn!("login with missing fields");
        return Err(AppError::Validation("missing login data").into());
    };

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::Validation("invalid email").into());
    }

    let Some(user) = state.users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::Unauthorized("user does not exist").into());
    };

    let ok = verify_password_async(password, user.password_hash.clone())
        .await
        .map_err(AppError::internal)?;
    if !ok {
        warn!(email = %email, user_id = user.id, "login invalid password");
        return Err(AppError::Unauthorized("incorrect user or password").into());
    }

    let token = state
        .jwt
        .issue(user.id, &user.email)
        .map_err(AppError::internal)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        message: "login successful".into(),
        token,
        user: user.into(),
    }))
}
