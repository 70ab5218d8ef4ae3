use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use super::{
    claims::Claims,
    jwt::{JwtKeys, TokenError},
};

#[derive(Debug, Error)]
pub enum AuthRejection {
    #[error("token not provided")]
    MissingToken,
    #[error("malformed token")]
    MalformedToken,
    #[error("invalid or expired token")]
    InvalidToken(#[from] TokenError),
}

impl AuthRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthRejection::MissingToken | AuthRejection::MalformedToken => StatusCode::UNAUTHORIZED,
            AuthRejection::InvalidToken(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Decides whether a request may proceed: returns the verified claims, or why not.
pub fn authorize(headers: &HeaderMap, keys: &JwtKeys) -> Result<Claims, AuthRejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AuthRejection::MissingToken)?
        .to_str()
        .map_err(|_| AuthRejection::MalformedToken)?;

    // "Bearer <token>": the second space-separated segment is the token. Whatever
    // is there goes to verification; only a missing or empty segment is malformed.
    let token = match value.split(' ').nth(1) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AuthRejection::MalformedToken),
    };

    Ok(keys.verify(token)?)
}

/// Layer for protected routes. On success the claims are available to handlers
/// as `Extension<Claims>`.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let claims = authorize(request.headers(), &keys).map_err(|e| {
        warn!(reason = %e, detail = ?e, uri = %request.uri(), "request rejected");
        e
    })?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
