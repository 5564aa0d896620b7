//! Handlers for the `/chapters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::types::DbId;
use plotline_core::validation::{present, require};
use plotline_db::models::chapter::{Chapter, CreateChapter, UpdateChapter};
use plotline_db::repositories::ChapterRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for `POST /chapters`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChapterRequest {
    #[serde(rename = "novelID")]
    #[validate(required)]
    pub novel_id: Option<DbId>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /chapters
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateChapterRequest>,
) -> AppResult<(StatusCode, Json<Chapter>)> {
    require(&input)?;
    let chapter = CreateChapter {
        novel_id: present("novelID", input.novel_id)?,
        title: present("title", input.title)?,
        content: input.content,
    };
    let chapter = ChapterRepo::create(&state.pool, &chapter).await?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

/// GET /chapters/{novel_id}
pub async fn list_by_novel(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Chapter>>> {
    let chapters = ChapterRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(chapters))
}

/// GET /chapters/chapter/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Chapter>> {
    let chapter = ChapterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Chapter", id)))?;
    Ok(Json(chapter))
}

/// PUT /chapters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Payload(input): Payload<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    let chapter = ChapterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Chapter", id)))?;
    Ok(Json(chapter))
}

/// DELETE /chapters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ChapterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Chapter", id)))
    }
}
