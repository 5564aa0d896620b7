//! Handlers for the user directory.

use axum::extract::{Path, State};
use axum::Json;
use plotline_core::error::CoreError;
use plotline_db::models::user::UserResponse;
use plotline_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/{email}
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &email)))?;
    Ok(Json(user.into()))
}
