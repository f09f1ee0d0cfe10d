//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues exactly
//! one statement.

pub mod part_repo;
pub mod vehicle_repo;

pub use part_repo::PartRepo;
pub use vehicle_repo::VehicleRepo;
