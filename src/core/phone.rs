//! Live formatting of the phone field

/// Country prefix added to bare ten-digit numbers
pub const INDIA_PREFIX: &str = "+91 ";

/// Rewrite a phone field value as the user types.
///
/// Returns the new value when the field should change, `None` when it
/// stays as typed. Only a value that does not already start with `+` and
/// holds exactly ten digits is rewritten.
pub fn format_phone_input(raw: &str) -> Option<String> {
    if raw.starts_with('+') {
        return None;
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == 10).then(|| format!("{INDIA_PREFIX}{digits}"))
}
