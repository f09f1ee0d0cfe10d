//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete) for one record kind. Handlers validate the body, make a
//! single store call through [`AppState::store_call`], and map errors via
//! [`AppError`].
//!
//! [`AppState::store_call`]: crate::state::AppState::store_call
//! [`AppError`]: crate::error::AppError

pub mod part;
pub mod vehicle;

use motorhub_core::error::CoreError;
use motorhub_core::types::{parse_record_id, RecordId};
use serde::Serialize;

/// Resolve a path id, treating anything unparsable as an unknown record.
pub(crate) fn record_id(entity: &'static str, raw: &str) -> Result<RecordId, CoreError> {
    parse_record_id(raw).ok_or_else(|| CoreError::not_found(entity, raw))
}

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub(crate) fn new(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted"),
        }
    }
}
