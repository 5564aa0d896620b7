//! Chapter entity model and DTOs.

use plotline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chapter row from the `chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "chapterID")]
    pub id: DbId,
    #[serde(rename = "novelID")]
    pub novel_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
#[derive(Debug, Clone)]
pub struct CreateChapter {
    pub novel_id: DbId,
    pub title: String,
    pub content: Option<String>,
}

/// DTO for updating a chapter. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
}
