//! Note entity model and DTOs.

use plotline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "noteID")]
    pub id: DbId,
    #[serde(rename = "novelID")]
    pub novel_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateNote {
    pub novel_id: DbId,
    pub title: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
}
