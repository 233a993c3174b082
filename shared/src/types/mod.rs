//! Type definitions shared by the API and the web app
//!
//! - `status` - Roles and lifecycle statuses for properties, units, leases and maintenance
//! - `plans` - Subscription tiers and pricing constants
//! - `response` - API response wrapper

pub mod plans;
pub mod response;
pub mod status;

// Re-export commonly used types at module level
pub use plans::{plan_for, smallest_plan_for, PlanTier, PricingPlan, PRICING_PLANS};
pub use response::ApiResponse;
pub use status::{
    LeaseStatus, MaintenancePriority, MaintenanceStatus, PropertyStatus, PropertyType,
    UnitStatus, UserRole,
};
