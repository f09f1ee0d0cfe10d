//! Part record model and DTOs.

use motorhub_core::error::CoreError;
use motorhub_core::types::RecordId;
use motorhub_core::validation::{non_empty, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::Record;

/// A row from the `parts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: RecordId,
    pub part_number: String,
    pub image: String,
    pub details: String,
}

/// Create body as received. Validated into a [`NewPart`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePart {
    pub part_number: Option<String>,
    pub image: Option<String>,
    pub details: Option<String>,
}

impl CreatePart {
    pub fn validate(self) -> Result<NewPart, CoreError> {
        let mut fields = RequiredFields::new(Part::ENTITY);
        let part = NewPart {
            part_number: fields.text("partNumber", self.part_number),
            image: fields.text("image", self.image),
            details: fields.text("details", self.details),
        };
        fields.finish()?;
        Ok(part)
    }
}

/// A fully validated part ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPart {
    pub part_number: String,
    pub image: String,
    pub details: String,
}

/// DTO for updating an existing part. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePart {
    pub part_number: Option<String>,
    pub image: Option<String>,
    pub details: Option<String>,
}

impl UpdatePart {
    pub fn validate(&self) -> Result<(), CoreError> {
        non_empty("partNumber", self.part_number.as_deref())?;
        non_empty("image", self.image.as_deref())?;
        non_empty("details", self.details.as_deref())
    }
}

impl Record for Part {
    const ENTITY: &'static str = "Part";
    type New = NewPart;
    type Patch = UpdatePart;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, input: &NewPart) -> Self {
        Self {
            id,
            part_number: input.part_number.clone(),
            image: input.image.clone(),
            details: input.details.clone(),
        }
    }

    fn apply(&mut self, patch: &UpdatePart) {
        if let Some(part_number) = &patch.part_number {
            self.part_number.clone_from(part_number);
        }
        if let Some(image) = &patch.image {
            self.image.clone_from(image);
        }
        if let Some(details) = &patch.details {
            self.details.clone_from(details);
        }
    }
}
