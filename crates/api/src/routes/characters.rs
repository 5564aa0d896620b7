//! Route definitions for the `/characters` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::characters;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> list_by_novel  (id = novel id)
/// PUT    /{id}          -> update         (sparse patch, id = character id)
/// DELETE /{id}          -> delete         (id = character id)
/// GET    /character/{id} -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(characters::create))
        .route(
            "/{id}",
            get(characters::list_by_novel)
                .put(characters::update)
                .delete(characters::delete),
        )
        .route("/character/{id}", get(characters::get_by_id))
}
