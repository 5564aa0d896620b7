//! Handlers for the `/novels` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::types::DbId;
use plotline_core::validation::{present, require};
use plotline_db::models::novel::{CreateNovel, Novel, UpdateNovel};
use plotline_db::repositories::NovelRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for `POST /novels`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNovelRequest {
    #[serde(rename = "userID")]
    #[validate(required)]
    pub user_id: Option<DbId>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub genre: Option<String>,
    pub summary: Option<String>,
}

/// POST /novels
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateNovelRequest>,
) -> AppResult<(StatusCode, Json<Novel>)> {
    require(&input)?;
    let novel = CreateNovel {
        user_id: present("userID", input.user_id)?,
        title: present("title", input.title)?,
        genre: input.genre,
        summary: input.summary,
    };
    let novel = NovelRepo::create(&state.pool, &novel).await?;
    Ok((StatusCode::CREATED, Json(novel)))
}

/// GET /novels/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Novel>>> {
    let novels = NovelRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(novels))
}

/// GET /novel/{user_id}/{title}
pub async fn get_by_title(
    State(state): State<AppState>,
    Path((user_id, title)): Path<(DbId, String)>,
) -> AppResult<Json<Novel>> {
    let novel = NovelRepo::find_by_title(&state.pool, user_id, &title)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Novel", &title)))?;
    Ok(Json(novel))
}

/// GET /novels/novel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Novel>> {
    let novel = NovelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Novel", id)))?;
    Ok(Json(novel))
}

/// PUT /novels/{id}
///
/// Omitted fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Payload(input): Payload<UpdateNovel>,
) -> AppResult<Json<Novel>> {
    let novel = NovelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Novel", id)))?;
    Ok(Json(novel))
}

/// DELETE /novels/{id}
///
/// Children of the novel are not removed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = NovelRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Novel", id)))
    }
}
