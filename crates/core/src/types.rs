/// Catalog record identifiers are opaque UUIDs assigned by the store.
pub type RecordId = uuid::Uuid;

/// Parse a path segment into a [`RecordId`].
///
/// Returns `None` for anything that is not a UUID; such an id can
/// never have been issued, so callers report it as not found.
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    RecordId::parse_str(raw.trim()).ok()
}

/// Generate a fresh identifier for a new record.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4()
}
