//! Enquiry form validation
//!
//! Rules are checked in a fixed order and the first failure wins, so the user
//! only ever sees one message per attempt.

use std::sync::LazyLock;

use regex::Regex;

use super::submission::FormSubmission;

/// Minimum length of the trimmed full name, in UTF-16 code units
pub const MIN_NAME_LENGTH: usize = 3;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{10,13}$").expect("phone pattern"));

static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("phone separator pattern"));

/// Validation failures, each carrying the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name (at least 3 characters)")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select a program of interest")]
    MissingProgram,
}

/// Check the submission against every rule, stopping at the first failure.
pub fn validate_submission(data: &FormSubmission) -> Result<(), ValidationError> {
    if name_length(&data.full_name) < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }

    if !is_valid_email(&data.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(&data.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if data.program.is_empty() {
        return Err(ValidationError::MissingProgram);
    }

    Ok(())
}

/// Length of a name as the browser measures it: byte order marks are trimmed
/// along with whitespace and characters outside the BMP count twice.
pub fn name_length(name: &str) -> usize {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .encode_utf16()
        .count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Remove spaces, dashes and parentheses from a phone number
pub fn clean_phone(phone: &str) -> String {
    PHONE_SEPARATORS.replace_all(phone, "").into_owned()
}

/// Optional leading `+` followed by 10 to 13 digits, once separators are removed
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(&clean_phone(phone))
}
