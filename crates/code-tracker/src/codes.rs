//! Human-readable verification codes: three letters followed by three digits.

use crate::error::TrackerError;
use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Length of every code (e.g. "ABC123").
pub const CODE_LEN: usize = 6;

/// Generate a code using the thread-local RNG.
///
/// No uniqueness check is made against existing codes.
pub fn generate_code() -> String {
    generate_code_with(&mut rand::thread_rng())
}

/// Generate a code from the given RNG.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    let mut code = String::with_capacity(CODE_LEN);
    for _ in 0..3 {
        code.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
    }
    for _ in 0..3 {
        code.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char);
    }
    code
}

/// True if `code` is exactly three uppercase ASCII letters followed by three digits.
pub fn is_valid_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == CODE_LEN
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Upper-case a submitted code and check its format.
pub fn normalize_code(raw: &str) -> Result<String, TrackerError> {
    if raw.is_empty() {
        return Err(TrackerError::Validation("Code is required".into()));
    }

    let code = raw.to_uppercase();
    if !is_valid_code(&code) {
        return Err(TrackerError::Validation("Invalid code format".into()));
    }

    Ok(code)
}
