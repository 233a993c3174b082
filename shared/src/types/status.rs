//! Role and status enumerations shared by the API and the web app
//!
//! Wire values are SCREAMING_SNAKE_CASE to match the database enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// `as_str`, `Display` and `FromStr` from one variant/string table
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($value => Ok($name::$variant),)+
                    _ => Err(SharedError::Validation {
                        message: format!("invalid {}: '{}'", stringify!($name), s),
                    }),
                }
            }
        }
    };
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Owner,
    Manager,
    Tenant,
    Admin,
}

string_enum!(UserRole {
    Owner => "OWNER",
    Manager => "MANAGER",
    Tenant => "TENANT",
    Admin => "ADMIN",
});

impl UserRole {
    /// Roles that may create and edit properties, units and leases
    pub fn can_manage_properties(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Manager | UserRole::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    SingleFamily,
    MultiUnit,
    Apartment,
    Condo,
    Townhouse,
    Commercial,
    Other,
}

string_enum!(PropertyType {
    SingleFamily => "SINGLE_FAMILY",
    MultiUnit => "MULTI_UNIT",
    Apartment => "APARTMENT",
    Condo => "CONDO",
    Townhouse => "TOWNHOUSE",
    Commercial => "COMMERCIAL",
    Other => "OTHER",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Active,
    Inactive,
    UnderContract,
    Sold,
}

string_enum!(PropertyStatus {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    UnderContract => "UNDER_CONTRACT",
    Sold => "SOLD",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    #[default]
    Vacant,
    Occupied,
    Maintenance,
    Reserved,
}

string_enum!(UnitStatus {
    Vacant => "VACANT",
    Occupied => "OCCUPIED",
    Maintenance => "MAINTENANCE",
    Reserved => "RESERVED",
});

impl UnitStatus {
    /// Whether a new lease can be started on the unit
    pub fn is_available(&self) -> bool {
        matches!(self, UnitStatus::Vacant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    #[default]
    Draft,
    Pending,
    Active,
    Expired,
    Terminated,
}

string_enum!(LeaseStatus {
    Draft => "DRAFT",
    Pending => "PENDING",
    Active => "ACTIVE",
    Expired => "EXPIRED",
    Terminated => "TERMINATED",
});

impl LeaseStatus {
    /// No further changes are expected once a lease reaches these states
    pub fn is_closed(&self) -> bool {
        matches!(self, LeaseStatus::Expired | LeaseStatus::Terminated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    #[default]
    Open,
    InProgress,
    OnHold,
    Completed,
    Canceled,
}

string_enum!(MaintenanceStatus {
    Open => "OPEN",
    InProgress => "IN_PROGRESS",
    OnHold => "ON_HOLD",
    Completed => "COMPLETED",
    Canceled => "CANCELED",
});

impl MaintenanceStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, MaintenanceStatus::Completed | MaintenanceStatus::Canceled)
    }
}

/// Ordered from `Low` to `Emergency`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

string_enum!(MaintenancePriority {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Emergency => "EMERGENCY",
});
