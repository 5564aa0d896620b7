//! Route definitions for credential handling.

use axum::routing::post;
use axum::Router;

use crate::handlers::credentials;
use crate::state::AppState;

/// ```text
/// POST /signup -> signup
/// POST /login  -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(credentials::signup))
        .route("/login", post(credentials::login))
}
