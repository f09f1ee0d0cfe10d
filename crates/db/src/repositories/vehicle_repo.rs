//! Repository for the `vehicles` table.

use motorhub_core::types::RecordId;
use sqlx::PgPool;

use crate::models::vehicle::{NewVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, model, image, price, company, features, more_details";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row. The id is assigned by
    /// the column default.
    pub async fn create(pool: &PgPool, input: &NewVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (model, image, price, company, features, more_details)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.model)
            .bind(&input.image)
            .bind(input.price)
            .bind(&input.company)
            .bind(&input.features)
            .bind(&input.more_details)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY seq ASC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                model = COALESCE($2, model),
                image = COALESCE($3, image),
                price = COALESCE($4, price),
                company = COALESCE($5, company),
                features = COALESCE($6, features),
                more_details = COALESCE($7, more_details)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.model)
            .bind(&input.image)
            .bind(input.price)
            .bind(&input.company)
            .bind(&input.features)
            .bind(&input.more_details)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a vehicle by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
