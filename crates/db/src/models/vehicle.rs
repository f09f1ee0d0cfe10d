//! Vehicle record model and DTOs.

use motorhub_core::error::CoreError;
use motorhub_core::types::RecordId;
use motorhub_core::validation::{non_empty, RequiredFields};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use crate::store::Record;

/// A row from the `vehicles` table, served under `/cars`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: RecordId,
    pub model: String,
    pub image: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub company: String,
    pub features: String,
    pub more_details: String,
}

/// Largest magnitude at which every whole `f64` is exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole prices go out as JSON integers so `22000` is echoed as `22000`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Create body as received. Validated into a [`NewVehicle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    pub model: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub company: Option<String>,
    pub features: Option<String>,
    pub more_details: Option<String>,
}

impl CreateVehicle {
    /// Check every required field is present and non-blank.
    pub fn validate(self) -> Result<NewVehicle, CoreError> {
        let mut fields = RequiredFields::new(Vehicle::ENTITY);
        let vehicle = NewVehicle {
            model: fields.text("model", self.model),
            image: fields.text("image", self.image),
            price: fields.number("price", self.price),
            company: fields.text("company", self.company),
            features: fields.text("features", self.features),
            more_details: fields.text("moreDetails", self.more_details),
        };
        fields.finish()?;
        Ok(vehicle)
    }
}

/// A fully validated vehicle ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub model: String,
    pub image: String,
    pub price: f64,
    pub company: String,
    pub features: String,
    pub more_details: String,
}

/// DTO for updating an existing vehicle. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub model: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub company: Option<String>,
    pub features: Option<String>,
    pub more_details: Option<String>,
}

impl UpdateVehicle {
    /// A present text field must not empty out a required value.
    pub fn validate(&self) -> Result<(), CoreError> {
        non_empty("model", self.model.as_deref())?;
        non_empty("image", self.image.as_deref())?;
        non_empty("company", self.company.as_deref())?;
        non_empty("features", self.features.as_deref())?;
        non_empty("moreDetails", self.more_details.as_deref())?;
        if self.price.is_some_and(|p| !p.is_finite()) {
            return Err(CoreError::Validation("price must be a number".into()));
        }
        Ok(())
    }
}

impl Record for Vehicle {
    const ENTITY: &'static str = "Vehicle";
    type New = NewVehicle;
    type Patch = UpdateVehicle;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, input: &NewVehicle) -> Self {
        Self {
            id,
            model: input.model.clone(),
            image: input.image.clone(),
            price: input.price,
            company: input.company.clone(),
            features: input.features.clone(),
            more_details: input.more_details.clone(),
        }
    }

    fn apply(&mut self, patch: &UpdateVehicle) {
        if let Some(model) = &patch.model {
            self.model.clone_from(model);
        }
        if let Some(image) = &patch.image {
            self.image.clone_from(image);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(company) = &patch.company {
            self.company.clone_from(company);
        }
        if let Some(features) = &patch.features {
            self.features.clone_from(features);
        }
        if let Some(more_details) = &patch.more_details {
            self.more_details.clone_from(more_details);
        }
    }
}
