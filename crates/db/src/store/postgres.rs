//! PostgreSQL-backed collections.

use async_trait::async_trait;
use motorhub_core::types::RecordId;

use super::{Collection, StoreError};
use crate::models::part::{NewPart, Part, UpdatePart};
use crate::models::vehicle::{NewVehicle, UpdateVehicle, Vehicle};
use crate::repositories::{PartRepo, VehicleRepo};
use crate::DbPool;

/// Adapts the table repositories to the [`Collection`] trait.
///
/// One value serves both record kinds; the pool is shared.
#[derive(Clone)]
pub struct PgCollection {
    pool: DbPool,
}

impl PgCollection {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Collection<Vehicle> for PgCollection {
    async fn create(&self, input: &NewVehicle) -> Result<Vehicle, StoreError> {
        Ok(VehicleRepo::create(&self.pool, input).await?)
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(VehicleRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Vehicle>, StoreError> {
        Ok(VehicleRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_by_id(
        &self,
        id: RecordId,
        patch: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, StoreError> {
        Ok(VehicleRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(VehicleRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl Collection<Part> for PgCollection {
    async fn create(&self, input: &NewPart) -> Result<Part, StoreError> {
        Ok(PartRepo::create(&self.pool, input).await?)
    }

    async fn find_all(&self) -> Result<Vec<Part>, StoreError> {
        Ok(PartRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Part>, StoreError> {
        Ok(PartRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_by_id(&self, id: RecordId, patch: &UpdatePart) -> Result<Option<Part>, StoreError> {
        Ok(PartRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(PartRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
