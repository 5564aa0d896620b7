//! Route definitions for the `/novels` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::novels;
use crate::state::AppState;

/// Routes mounted at `/novels`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> list_by_user   (id = user id)
/// PUT    /{id}          -> update         (id = novel id)
/// DELETE /{id}          -> delete         (id = novel id)
/// GET    /novel/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(novels::create))
        .route(
            "/{id}",
            get(novels::list_by_user)
                .put(novels::update)
                .delete(novels::delete),
        )
        .route("/novel/{id}", get(novels::get_by_id))
}

/// Natural-key lookup, mounted at the root.
///
/// ```text
/// GET /novel/{user_id}/{title} -> get_by_title
/// ```
pub fn lookup_router() -> Router<AppState> {
    Router::new().route("/novel/{user_id}/{title}", get(novels::get_by_title))
}
