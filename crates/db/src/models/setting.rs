//! Setting (story location / world element) model and DTOs.

use plotline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A setting row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    #[serde(rename = "settingID")]
    pub id: DbId,
    #[serde(rename = "novelID")]
    pub novel_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateSetting {
    pub novel_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub details: Option<String>,
}

/// DTO for updating a setting. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSetting {
    pub name: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
}
