//! Lease create/update forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codes;
use super::units::check_amount;
use crate::types::LeaseStatus;
use crate::utils::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCreate {
    pub unit_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent_cents: i64,
    #[serde(default)]
    pub security_deposit_cents: i64,
    #[serde(default = "default_lease_status")]
    pub status: LeaseStatus,
}

fn default_lease_status() -> LeaseStatus {
    LeaseStatus::Draft
}

impl LeaseCreate {
    /// Whole days covered, end exclusive
    pub fn term_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_deposit_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaseStatus>,
}

fn check_dates(errors: &mut ValidationErrors, start: NaiveDate, end: NaiveDate) {
    errors.check(
        end > start,
        "endDate",
        "endDate must be after startDate",
        codes::INVALID_DATE_RANGE,
    );
}

impl Validate for LeaseCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_dates(&mut errors, self.start_date, self.end_date);
        check_amount(&mut errors, "monthlyRentCents", self.monthly_rent_cents);
        check_amount(&mut errors, "securityDepositCents", self.security_deposit_cents);
        errors.into_result()
    }
}

impl Validate for LeaseUpdate {
    /// Date ordering is only checked when both dates change together; a
    /// single moved date has to be checked against the stored lease.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self == &Self::default() {
            errors.add_error("body", "at least one field must be provided", codes::EMPTY_UPDATE);
            return errors.into_result();
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            check_dates(&mut errors, start, end);
        }
        if let Some(rent) = self.monthly_rent_cents {
            check_amount(&mut errors, "monthlyRentCents", rent);
        }
        if let Some(deposit) = self.security_deposit_cents {
            check_amount(&mut errors, "securityDepositCents", deposit);
        }
        errors.into_result()
    }
}
