use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::users::repo_types::RepoError;

/// Errors a handler can return. Anything server-side renders as a generic 500 and
/// keeps the detail in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error(transparent)]
    Store(#[from] RepoError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(e: impl std::fmt::Display) -> Self {
        AppError::Internal(e.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the client gets to see. Server-side detail is logged here instead.
    fn client_message(&self) -> &'static str {
        match self {
            AppError::Validation(msg) | AppError::Unauthorized(msg) => *msg,
            AppError::Store(e) => {
                error!(error = %e, "store failure");
                "internal server error"
            }
            AppError::Internal(e) => {
                error!(error = %e, "internal failure");
                "internal server error"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.client_message();
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// Login keeps its own envelope: `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct LoginError(#[from] pub AppError);

impl From<RepoError> for LoginError {
    fn from(e: RepoError) -> Self {
        LoginError(AppError::Store(e))
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let message = self.0.client_message();
        let body = json!({ "success": false, "message": message });
        (self.0.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn internal_detail_is_not_leaked() {
        let res = AppError::internal("argon2 exploded: secret detail").into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("secret detail"));
        assert!(text.contains("internal server error"));
    }

    #[tokio::test]
    async fn login_errors_use_success_message_envelope() {
        let res = LoginError(AppError::Unauthorized("user does not exist")).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "success": false, "message": "user does not exist" }));

        let res = LoginError::from(RepoError::StoreUnavailable(sqlx::Error::PoolClosed))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "internal server error");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        assert_eq!(
            AppError::Validation("missing required fields").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("user does not exist").status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
