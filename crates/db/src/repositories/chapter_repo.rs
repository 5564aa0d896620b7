//! Repository for the `chapters` table.

use plotline_core::types::DbId;
use sqlx::SqlitePool;

use super::NOW;
use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, novel_id, title, content, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateChapter) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (novel_id, title, content)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(input.novel_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a chapter by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = ?");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all chapters of a novel in insertion order.
    pub async fn list_by_novel(
        pool: &SqlitePool,
        novel_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE novel_id = ? ORDER BY id");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Update a chapter. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE chapters SET
                title = COALESCE(?, title),
                content = COALESCE(?, content),
                updated_at = {NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a chapter by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
