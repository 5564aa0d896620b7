use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> list_by_novel  (id = novel id)
/// PUT    /{id}          -> update         (id = note id)
/// DELETE /{id}          -> delete         (id = note id)
/// GET    /note/{id}     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notes::create))
        .route(
            "/{id}",
            get(notes::list_by_novel)
                .put(notes::update)
                .delete(notes::delete),
        )
        .route("/note/{id}", get(notes::get_by_id))
}
