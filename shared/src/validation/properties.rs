//! Property create/update forms

use serde::{Deserialize, Serialize};

use super::codes;
use crate::types::PropertyType;
use crate::utils::validation::{validators, Validate, ValidationErrors};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_ADDRESS_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default = "default_property_type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_property_type() -> PropertyType {
    PropertyType::SingleFamily
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub(crate) fn check_required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    max: usize,
) {
    if !validators::not_empty(value) {
        errors.add_error(field, format!("{} is required", field), codes::REQUIRED);
    } else if !validators::length_between(value.trim(), 1, max) {
        errors.add_error(
            field,
            format!("{} must be at most {} characters", field, max),
            codes::TOO_LONG,
        );
    }
}

fn check_state(errors: &mut ValidationErrors, state: &str) {
    errors.check(
        validators::is_valid_state_code(state),
        "state",
        "state must be a two-letter code such as CA",
        codes::INVALID_FORMAT,
    );
}

fn check_zip(errors: &mut ValidationErrors, zip: &str) {
    errors.check(
        validators::is_valid_zip(zip),
        "zipCode",
        "zipCode must be 5 digits or ZIP+4",
        codes::INVALID_FORMAT,
    );
}

fn check_description(errors: &mut ValidationErrors, description: Option<&str>) {
    if let Some(description) = description {
        errors.check(
            validators::length_between(description, 0, MAX_DESCRIPTION_CHARS),
            "description",
            "description is too long",
            codes::TOO_LONG,
        );
    }
}

impl Validate for PropertyCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "name", &self.name, MAX_NAME_CHARS);
        check_required_text(&mut errors, "address", &self.address, MAX_ADDRESS_CHARS);
        check_required_text(&mut errors, "city", &self.city, MAX_NAME_CHARS);
        check_state(&mut errors, &self.state);
        check_zip(&mut errors, &self.zip_code);
        check_description(&mut errors, self.description.as_deref());
        errors.into_result()
    }
}

impl PropertyUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Validate for PropertyUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.is_empty() {
            errors.add_error("body", "at least one field must be provided", codes::EMPTY_UPDATE);
            return errors.into_result();
        }
        if let Some(name) = &self.name {
            check_required_text(&mut errors, "name", name, MAX_NAME_CHARS);
        }
        if let Some(address) = &self.address {
            check_required_text(&mut errors, "address", address, MAX_ADDRESS_CHARS);
        }
        if let Some(city) = &self.city {
            check_required_text(&mut errors, "city", city, MAX_NAME_CHARS);
        }
        if let Some(state) = &self.state {
            check_state(&mut errors, state);
        }
        if let Some(zip) = &self.zip_code {
            check_zip(&mut errors, zip);
        }
        check_description(&mut errors, self.description.as_deref());
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> PropertyCreate {
        PropertyCreate {
            name: "Maple Court".to_string(),
            address: "123 Maple St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78701".to_string(),
            property_type: PropertyType::MultiUnit,
            description: None,
        }
    }

    #[test]
    fn test_valid_property() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let property = PropertyCreate {
            name: "  ".to_string(),
            state: "Texas".to_string(),
            zip_code: "787".to_string(),
            ..valid()
        };
        let errors = property.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("state"));
        assert!(errors.has_field("zipCode"));
        assert_eq!(errors.errors()[0].code, codes::REQUIRED);
    }

    #[test]
    fn test_length_limits() {
        let property = PropertyCreate {
            name: "n".repeat(MAX_NAME_CHARS + 1),
            description: Some("d".repeat(MAX_DESCRIPTION_CHARS + 1)),
            ..valid()
        };
        let errors = property.validate().unwrap_err();
        assert!(errors.has_field("name"));
        assert!(errors.has_field("description"));
        assert!(errors.errors().iter().all(|e| e.code == codes::TOO_LONG));
    }

    #[test]
    fn test_deserialize_camel_case_with_default_type() {
        let property: PropertyCreate = serde_json::from_value(json!({
            "name": "Maple Court",
            "address": "123 Maple St",
            "city": "Austin",
            "state": "TX",
            "zipCode": "78701-1234",
        }))
        .unwrap();
        assert_eq!(property.property_type, PropertyType::SingleFamily);
        assert!(property.validate().is_ok());
    }

    #[test]
    fn test_update_rules() {
        assert!(PropertyUpdate::default().validate().unwrap_err().has_field("body"));

        let update = PropertyUpdate {
            state: Some("tx".to_string()),
            ..Default::default()
        };
        assert!(update.validate().unwrap_err().has_field("state"));

        let update = PropertyUpdate {
            name: Some("Maple Court East".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
