//! Route definitions for the `/chapters` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chapters;
use crate::state::AppState;

/// Routes mounted at `/chapters`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> list_by_novel  (id = novel id)
/// PUT    /{id}          -> update         (id = chapter id)
/// DELETE /{id}          -> delete         (id = chapter id)
/// GET    /chapter/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(chapters::create))
        .route(
            "/{id}",
            get(chapters::list_by_novel)
                .put(chapters::update)
                .delete(chapters::delete),
        )
        .route("/chapter/{id}", get(chapters::get_by_id))
}
