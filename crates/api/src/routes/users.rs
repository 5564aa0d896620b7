use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /users          -> list
/// GET /user/{email}   -> get_by_email
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route("/user/{email}", get(users::get_by_email))
}
