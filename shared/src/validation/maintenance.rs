//! Maintenance request forms

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codes;
use crate::types::{MaintenancePriority, MaintenanceStatus};
use crate::utils::validation::{validators, Validate, ValidationErrors};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestCreate {
    pub unit_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: MaintenancePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<MaintenancePriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
}

fn check_title(errors: &mut ValidationErrors, title: &str) {
    if !validators::not_empty(title) {
        errors.add_error("title", "title is required", codes::REQUIRED);
    } else if !validators::length_between(title, 1, MAX_TITLE_CHARS) {
        errors.add_error("title", "title must be at most 200 characters", codes::TOO_LONG);
    }
}

fn check_description(errors: &mut ValidationErrors, description: &str) {
    errors.check(
        validators::length_between(description, 0, MAX_DESCRIPTION_CHARS),
        "description",
        "description must be at most 2000 characters",
        codes::TOO_LONG,
    );
}

impl Validate for MaintenanceRequestCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_title(&mut errors, &self.title);
        check_description(&mut errors, &self.description);
        errors.into_result()
    }
}

impl Validate for MaintenanceRequestUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self == &Self::default() {
            errors.add_error("body", "at least one field must be provided", codes::EMPTY_UPDATE);
            return errors.into_result();
        }
        if let Some(title) = &self.title {
            check_title(&mut errors, title);
        }
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        errors.into_result()
    }
}
