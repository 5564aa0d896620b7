//! Novel entity model and DTOs.

use plotline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A novel row from the `novels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    #[serde(rename = "novelID")]
    pub id: DbId,
    #[serde(rename = "userID")]
    pub user_id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub summary: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new novel.
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub user_id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub summary: Option<String>,
}

/// DTO for updating a novel. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNovel {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub summary: Option<String>,
}
