//! Unit create/update forms

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codes;
use super::properties::check_required_text;
use crate::types::UnitStatus;
use crate::utils::validation::{Validate, ValidationErrors};

pub const MAX_UNIT_NUMBER_CHARS: usize = 20;
pub const MAX_BEDROOMS: i32 = 20;
pub const MAX_BATHROOMS: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    pub property_id: Uuid,
    pub unit_number: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    pub monthly_rent_cents: i64,
    #[serde(default = "default_unit_status")]
    pub status: UnitStatus,
}

fn default_unit_status() -> UnitStatus {
    UnitStatus::Vacant
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UnitStatus>,
}

fn check_bedrooms(errors: &mut ValidationErrors, bedrooms: i32) {
    errors.check(
        (0..=MAX_BEDROOMS).contains(&bedrooms),
        "bedrooms",
        "bedrooms must be between 0 and 20",
        codes::OUT_OF_RANGE,
    );
}

// Half baths only
fn check_bathrooms(errors: &mut ValidationErrors, bathrooms: f64) {
    let in_range = (0.0..=MAX_BATHROOMS).contains(&bathrooms);
    errors.check(
        in_range && (bathrooms * 2.0).fract() == 0.0,
        "bathrooms",
        "bathrooms must be between 0 and 20 in steps of 0.5",
        codes::OUT_OF_RANGE,
    );
}

pub(crate) fn check_amount(errors: &mut ValidationErrors, field: &str, cents: i64) {
    if cents < 0 {
        errors.add_error(field, format!("{} cannot be negative", field), codes::OUT_OF_RANGE);
    }
}

impl Validate for UnitInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "unitNumber", &self.unit_number, MAX_UNIT_NUMBER_CHARS);
        check_bedrooms(&mut errors, self.bedrooms);
        check_bathrooms(&mut errors, self.bathrooms);
        check_amount(&mut errors, "monthlyRentCents", self.monthly_rent_cents);
        errors.into_result()
    }
}

impl Validate for UnitUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self == &Self::default() {
            errors.add_error("body", "at least one field must be provided", codes::EMPTY_UPDATE);
            return errors.into_result();
        }
        if let Some(unit_number) = &self.unit_number {
            check_required_text(&mut errors, "unitNumber", unit_number, MAX_UNIT_NUMBER_CHARS);
        }
        if let Some(bedrooms) = self.bedrooms {
            check_bedrooms(&mut errors, bedrooms);
        }
        if let Some(bathrooms) = self.bathrooms {
            check_bathrooms(&mut errors, bathrooms);
        }
        if let Some(rent) = self.monthly_rent_cents {
            check_amount(&mut errors, "monthlyRentCents", rent);
        }
        errors.into_result()
    }
}
