//! Mobile number normalization, validation and display formatting.

use crate::error::TrackerError;

/// Minimum digits in a valid mobile number.
pub const MIN_DIGITS: usize = 10;

/// Maximum digits in a valid mobile number (E.164 limit).
pub const MAX_DIGITS: usize = 15;

/// Strip every non-digit character.
pub fn normalize_mobile(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True if the digits-only form has 10 to 15 digits.
pub fn validate_mobile(raw: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&normalize_mobile(raw).len())
}

/// Normalize and validate, returning the canonical digits.
pub fn parse_mobile(raw: &str) -> Result<String, TrackerError> {
    let digits = normalize_mobile(raw);

    if digits.is_empty() {
        return Err(TrackerError::Validation("Mobile number is required".into()));
    }

    if !validate_mobile(&digits) {
        return Err(TrackerError::Validation(format!(
            "Invalid mobile number: expected {}-{} digits, got {}",
            MIN_DIGITS,
            MAX_DIGITS,
            digits.len()
        )));
    }

    Ok(digits)
}

/// Render a 10-digit number as `(AAA) BBB-CCCC`; other lengths come back as bare digits.
pub fn format_mobile(raw: &str) -> String {
    let digits = normalize_mobile(raw);

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}
