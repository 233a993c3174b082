//! Tests for payment error handling

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod client_safe_tests;
#[cfg(test)]
mod registry_tests;
