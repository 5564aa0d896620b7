//! Repository for the `characters` table.
//!
//! Inserts and patches are assembled with [`QueryBuilder`] because the
//! biography column set is declared once in the model and the patch column
//! list varies per request.

use std::sync::LazyLock;

use plotline_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::NOW;
use crate::models::character::{Character, CharacterProfile, CreateCharacter, UpdateCharacter};

/// Column list shared across queries: fixed columns, every profile column,
/// then the timestamps.
static COLUMNS: LazyLock<String> = LazyLock::new(|| {
    let mut columns = vec!["id", "novel_id", "name", "description", "role"];
    columns.extend_from_slice(CharacterProfile::COLUMNS);
    columns.extend(["created_at", "updated_at"]);
    columns.join(", ")
});

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character with its full profile, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let mut query =
            QueryBuilder::<Sqlite>::new("INSERT INTO characters (novel_id, name, description, role");
        for column in CharacterProfile::COLUMNS {
            query.push(", ").push(column);
        }
        query.push(") VALUES (");
        {
            let mut values = query.separated(", ");
            values.push_bind(input.novel_id);
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.role.clone());
            for value in input.profile.values() {
                values.push_bind(value);
            }
        }
        query.push(format!(") RETURNING {}", *COLUMNS));

        let character = query.build_query_as::<Character>().fetch_one(pool).await?;
        Ok(character)
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {} FROM characters WHERE id = ?", *COLUMNS);
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters of a novel in insertion order.
    pub async fn list_by_novel(
        pool: &SqlitePool,
        novel_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM characters WHERE novel_id = ? ORDER BY id",
            *COLUMNS
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse patch: only the columns present in `input` are written.
    ///
    /// Column clauses and their bind values are pushed pairwise from
    /// [`UpdateCharacter::assignments`]; the row key is bound last. An empty
    /// patch writes nothing and returns the current row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let assignments = input.assignments();
        if assignments.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        tracing::debug!(character_id = id, columns = assignments.len(), "Patching character");

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE characters SET ");
        {
            let mut set = query.separated(", ");
            for (column, value) in assignments {
                set.push(format!("{column} = "));
                set.push_bind_unseparated(value);
            }
            set.push(format!("updated_at = {NOW}"));
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(format!(" RETURNING {}", *COLUMNS));

        let character = query
            .build_query_as::<Character>()
            .fetch_optional(pool)
            .await?;
        Ok(character)
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
