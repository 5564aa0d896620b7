//! Repository for the `novels` table.

use plotline_core::types::DbId;
use sqlx::SqlitePool;

use super::NOW;
use crate::models::novel::{CreateNovel, Novel, UpdateNovel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, genre, summary, created_at, updated_at";

/// Provides CRUD operations for novels.
pub struct NovelRepo;

impl NovelRepo {
    /// Insert a new novel, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateNovel) -> Result<Novel, sqlx::Error> {
        let query = format!(
            "INSERT INTO novels (user_id, title, genre, summary)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// Find a novel by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE id = ?");
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's novel by exact title. Titles are not unique; the
    /// oldest match wins.
    pub async fn find_by_title(
        pool: &SqlitePool,
        user_id: DbId,
        title: &str,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM novels WHERE user_id = ? AND title = ? ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(user_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List every novel owned by `user_id` in insertion order.
    pub async fn list_by_user(pool: &SqlitePool, user_id: DbId) -> Result<Vec<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE user_id = ? ORDER BY id");
        sqlx::query_as::<_, Novel>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a novel. Only non-`None` fields in `input` are applied; the
    /// rest keep their stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateNovel,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "UPDATE novels SET
                title = COALESCE(?, title),
                genre = COALESCE(?, genre),
                summary = COALESCE(?, summary),
                updated_at = {NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.summary)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a novel by ID. Returns `true` if a row was removed.
    ///
    /// Chapters, characters, notes and settings of the novel are left in place.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM novels WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
