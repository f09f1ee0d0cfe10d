//! Required-field checks applied to request bodies before they reach a store.
//!
//! Create bodies arrive with every field optional so that a missing field is
//! reported as a validation failure naming the field, rather than as an
//! opaque deserialization error.

use crate::error::CoreError;

/// Collects missing or blank required fields while unpacking a create body.
///
/// ```ignore
/// let mut fields = RequiredFields::new("Vehicle");
/// let model = fields.text("model", input.model);
/// let price = fields.number("price", input.price);
/// fields.finish()?;
/// ```
#[derive(Debug)]
pub struct RequiredFields {
    entity: &'static str,
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            missing: Vec::new(),
        }
    }

    /// Take a required text field. The empty string counts as missing;
    /// whitespace is kept as submitted.
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Take a required numeric field. Any finite number is accepted,
    /// including zero and negatives.
    pub fn number(&mut self, name: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            _ => {
                self.missing.push(name);
                0.0
            }
        }
    }

    /// Fail with a [`CoreError::Validation`] listing every missing field.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "{} is missing required fields: {}",
            self.entity,
            self.missing.join(", ")
        )))
    }
}

/// Reject a present-but-empty text field in a partial update.
///
/// Absent fields are left untouched by an update and are always accepted.
pub fn non_empty(name: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some("") => Err(CoreError::Validation(format!("{name} must not be empty"))),
        _ => Ok(()),
    }
}
