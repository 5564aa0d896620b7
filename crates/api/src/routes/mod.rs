pub mod auth;
pub mod chapters;
pub mod characters;
pub mod health;
pub mod notes;
pub mod novels;
pub mod settings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signup                                  signup (POST)
/// /login                                   login (POST)
///
/// /users                                   list users
/// /user/{email}                            get user by email
///
/// /novels                                  create
/// /novels/{id}                             list by user (GET), update, delete
/// /novels/novel/{id}                       get by id
/// /novel/{user_id}/{title}                 get by owner + title
///
/// /chapters                                create
/// /chapters/{id}                           list by novel (GET), update, delete
/// /chapters/chapter/{id}                   get by id
///
/// /characters                              create
/// /characters/{id}                         list by novel (GET), patch (PUT), delete
/// /characters/character/{id}               get by id
///
/// /notes                                   create
/// /notes/{id}                              list by novel (GET), update, delete
/// /notes/note/{id}                         get by id
///
/// /settings                                create
/// /settings/{id}                           list by novel (GET), update, delete
/// /settings/setting/{id}                   get by id
/// ```
///
/// On the `/{id}` routes a GET takes the parent id while PUT and DELETE take
/// the row's own id.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Signup and login.
        .merge(auth::router())
        // User directory.
        .merge(users::router())
        // Novels, plus the owner + title lookup.
        .nest("/novels", novels::router())
        .merge(novels::lookup_router())
        // Novel-scoped records.
        .nest("/chapters", chapters::router())
        .nest("/characters", characters::router())
        .nest("/notes", notes::router())
        .nest("/settings", settings::router())
}
