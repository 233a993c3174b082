//! Common utility functions

pub mod format;
pub mod phone;
pub mod sanitize;
pub mod validation;

// Re-export commonly used utilities
pub use format::{format_currency, format_date, format_percentage, truncate};
pub use phone::{format_us_phone, is_valid_phone, mask_phone_number, normalize_phone_number};
pub use sanitize::sanitize_metadata;
pub use validation::{Validate, ValidationError, ValidationErrors};
