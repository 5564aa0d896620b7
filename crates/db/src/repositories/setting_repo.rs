//! Repository for the `settings` table.

use plotline_core::types::DbId;
use sqlx::SqlitePool;

use super::NOW;
use crate::models::setting::{CreateSetting, Setting, UpdateSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, novel_id, name, description, details, created_at, updated_at";

/// Provides CRUD operations for settings.
pub struct SettingRepo;

impl SettingRepo {
    /// Insert a new setting, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSetting) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (novel_id, name, description, details)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(input.novel_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = ?");
        sqlx::query_as::<_, Setting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all settings of a novel in insertion order.
    pub async fn list_by_novel(
        pool: &SqlitePool,
        novel_id: DbId,
    ) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE novel_id = ? ORDER BY id");
        sqlx::query_as::<_, Setting>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Update a setting. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSetting,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                details = COALESCE(?, details),
                updated_at = {NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.details)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a setting by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM settings WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
