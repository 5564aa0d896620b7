//! Handlers for the `/settings` resource (places and world elements of a
//! novel, not application settings).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::types::DbId;
use plotline_core::validation::{present, require};
use plotline_db::models::setting::{CreateSetting, Setting, UpdateSetting};
use plotline_db::repositories::SettingRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for `POST /settings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSettingRequest {
    #[serde(rename = "novelID")]
    #[validate(required)]
    pub novel_id: Option<DbId>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
}

/// POST /settings
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateSettingRequest>,
) -> AppResult<(StatusCode, Json<Setting>)> {
    require(&input)?;
    let setting = CreateSetting {
        novel_id: present("novelID", input.novel_id)?,
        name: present("name", input.name)?,
        description: input.description,
        details: input.details,
    };
    let setting = SettingRepo::create(&state.pool, &setting).await?;
    Ok((StatusCode::CREATED, Json(setting)))
}

/// GET /settings/{novel_id}
pub async fn list_by_novel(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Setting>>> {
    let settings = SettingRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(settings))
}

/// GET /settings/setting/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Setting>> {
    let setting = SettingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Setting", id)))?;
    Ok(Json(setting))
}

/// PUT /settings/{id}
///
/// Omitted fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Payload(input): Payload<UpdateSetting>,
) -> AppResult<Json<Setting>> {
    let setting = SettingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Setting", id)))?;
    Ok(Json(setting))
}

/// DELETE /settings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SettingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Setting", id)))
    }
}
