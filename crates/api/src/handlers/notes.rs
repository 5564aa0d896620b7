//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::types::DbId;
use plotline_core::validation::{present, require};
use plotline_db::models::note::{CreateNote, Note, UpdateNote};
use plotline_db::repositories::NoteRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[serde(rename = "novelID")]
    #[validate(required)]
    pub novel_id: Option<DbId>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateNoteRequest>,
) -> AppResult<(StatusCode, Json<Note>)> {
    require(&input)?;
    let note = CreateNote {
        novel_id: present("novelID", input.novel_id)?,
        title: present("title", input.title)?,
        content: input.content,
    };
    let note = NoteRepo::create(&state.pool, &note).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/{novel_id}
pub async fn list_by_novel(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Note>>> {
    Ok(Json(NoteRepo::list_by_novel(&state.pool, novel_id).await?))
}

/// GET /notes/note/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Note", id)))?;
    Ok(Json(note))
}

/// PUT /notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Payload(input): Payload<UpdateNote>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Note", id)))?;
    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if NoteRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Note", id)))
    }
}
