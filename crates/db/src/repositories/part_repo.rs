//! Repository for the `parts` table.

use motorhub_core::types::RecordId;
use sqlx::PgPool;

use crate::models::part::{NewPart, Part, UpdatePart};

const COLUMNS: &str = "id, part_number, image, details";

/// Provides CRUD operations for parts.
pub struct PartRepo;

impl PartRepo {
    /// Insert a new part, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPart) -> Result<Part, sqlx::Error> {
        let query = format!(
            "INSERT INTO parts (part_number, image, details)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(&input.part_number)
            .bind(&input.image)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = $1");
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all parts, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts ORDER BY seq ASC");
        sqlx::query_as::<_, Part>(&query).fetch_all(pool).await
    }

    /// Update a part. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &UpdatePart,
    ) -> Result<Option<Part>, sqlx::Error> {
        let query = format!(
            "UPDATE parts SET
                part_number = COALESCE($2, part_number),
                image = COALESCE($3, image),
                details = COALESCE($4, details)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .bind(&input.part_number)
            .bind(&input.image)
            .bind(&input.details)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
