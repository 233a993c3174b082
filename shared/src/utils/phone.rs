//! Phone number utilities for tenant and owner contact details

use once_cell::sync::Lazy;
use regex::Regex;

// NANP: area code and exchange cannot start with 0 or 1
static US_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[2-9]\d{2}[2-9]\d{6}$").expect("valid US phone regex"));

// E.164
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid E.164 regex"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// The 10 national digits of a US number, accepting `+1` / `1` prefixes
fn us_national_digits(phone: &str) -> Option<String> {
    let normalized = normalize_phone_number(phone);
    let digits = normalized
        .strip_prefix("+1")
        .or_else(|| {
            if normalized.len() == 11 {
                normalized.strip_prefix('1')
            } else {
                None
            }
        })
        .unwrap_or(&normalized);

    if US_PHONE_REGEX.is_match(digits) {
        Some(digits.to_string())
    } else {
        None
    }
}

/// Check if a phone number is a valid US number
pub fn is_valid_us_phone(phone: &str) -> bool {
    us_national_digits(phone).is_some()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Check if a phone number is valid (either US or international)
pub fn is_valid_phone(phone: &str) -> bool {
    is_valid_us_phone(phone) || is_valid_international_phone(phone)
}

/// Format a US number for display, e.g. `(415) 555-2671`
pub fn format_us_phone(phone: &str) -> Option<String> {
    us_national_digits(phone).map(|digits| {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    })
}

/// Convert a US number to E.164, e.g. `+14155552671`
pub fn to_e164(phone: &str) -> Option<String> {
    if let Some(digits) = us_national_digits(phone) {
        return Some(format!("+1{}", digits));
    }
    let normalized = normalize_phone_number(phone);
    if INTERNATIONAL_PHONE_REGEX.is_match(&normalized) {
        Some(normalized)
    } else {
        None
    }
}

/// Mask a phone number for display (e.g., ***-***-2671)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    let digits: Vec<char> = normalized.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 7 {
        let last_four: String = digits[digits.len() - 4..].iter().collect();
        format!("***-***-{}", last_four)
    } else {
        "***-***-****".to_string()
    }
}
