//! Handlers for the `/characters` resource.
//!
//! Updates are sparse patches: only fields present in the body are written,
//! and a body with no recognized field is rejected before the store is
//! touched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::types::DbId;
use plotline_core::validation::{no_fields_provided, present, require};
use plotline_db::models::character::{
    Character, CharacterProfile, CreateCharacter, UpdateCharacter,
};
use plotline_db::repositories::CharacterRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for `POST /characters`. Biography fields sit at the top
/// level next to the required ones.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCharacterRequest {
    #[serde(rename = "novelID")]
    #[validate(required)]
    pub novel_id: Option<DbId>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: CharacterProfile,
}

/// POST /characters
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateCharacterRequest>,
) -> AppResult<(StatusCode, Json<Character>)> {
    require(&input)?;
    let character = CreateCharacter {
        novel_id: present("novelID", input.novel_id)?,
        name: present("name", input.name)?,
        description: input.description,
        role: input.role,
        profile: input.profile,
    };
    let character = CharacterRepo::create(&state.pool, &character).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /characters/{novel_id}
pub async fn list_by_novel(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(characters))
}

/// GET /characters/character/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Character", id)))?;
    Ok(Json(character))
}

/// PUT /characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Payload(input): Payload<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    if input.is_empty() {
        return Err(no_fields_provided().into());
    }
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Character", id)))?;
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Character", id)))
    }
}
