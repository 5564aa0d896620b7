//! Route definitions for the `/settings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> list_by_novel  (id = novel id)
/// PUT    /{id}          -> update         (id = setting id)
/// DELETE /{id}          -> delete         (id = setting id)
/// GET    /setting/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(settings::create))
        .route(
            "/{id}",
            get(settings::list_by_novel)
                .put(settings::update)
                .delete(settings::delete),
        )
        .route("/setting/{id}", get(settings::get_by_id))
}
