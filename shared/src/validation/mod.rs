//! Input schemas for create/update forms
//!
//! Each schema deserializes from the camelCase JSON the web app submits and
//! implements [`Validate`](crate::utils::validation::Validate), collecting
//! every failing field rather than stopping at the first.

pub mod leases;
pub mod maintenance;
pub mod properties;
pub mod units;

pub use leases::{LeaseCreate, LeaseUpdate};
pub use maintenance::{MaintenanceRequestCreate, MaintenanceRequestUpdate};
pub use properties::{PropertyCreate, PropertyUpdate};
pub use units::{UnitInput, UnitUpdate};

/// Error codes attached to field errors
pub mod codes {
    pub const REQUIRED: &str = "REQUIRED";
    pub const TOO_LONG: &str = "TOO_LONG";
    pub const INVALID_FORMAT: &str = "INVALID_FORMAT";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const INVALID_DATE_RANGE: &str = "INVALID_DATE_RANGE";
    pub const EMPTY_UPDATE: &str = "EMPTY_UPDATE";
}
