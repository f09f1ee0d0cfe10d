//! Catalog record structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` record struct matching the table row
//! - A `Deserialize` create DTO with every field optional, validated into
//!   a concrete insert struct
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod part;
pub mod vehicle;
