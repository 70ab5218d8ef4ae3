use axum::{middleware, Router};

use crate::{auth::middleware::require_auth, state::AppState};

pub mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
pub mod repo;
pub mod repo_types;

/// User CRUD routes, all behind bearer-token auth.
pub fn router(state: AppState) -> Router<AppState> {
    handlers::user_routes().route_layer(middleware::from_fn_with_state(state, require_auth))
}
