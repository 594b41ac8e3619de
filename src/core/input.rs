use thiserror::Error;

/// Errors that can occur while reading numeric form input.
///
/// The GUI never surfaces these: every caller there goes through
/// [`int_or`]/[`float_or`] and substitutes a component-specific
/// default.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    /// Field was empty (or whitespace only).
    #[error("input is empty")]
    Empty,
    /// Field contained something that is not a number.
    #[error("not a number: {0}")]
    NotNumeric(String),
}

/// Parses an integer field, distinguishing blank from malformed input.
pub fn parse_int(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::NotNumeric(trimmed.to_string()))
}

/// Parses a decimal field, distinguishing blank from malformed input.
pub fn parse_float(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::NotNumeric(trimmed.to_string()))
}

/// Integer field value, or `default` when blank or malformed.
pub fn int_or(text: &str, default: i64) -> i64 {
    parse_int(text).unwrap_or(default)
}

/// Decimal field value, or `default` when blank or malformed.
pub fn float_or(text: &str, default: f64) -> f64 {
    parse_float(text).unwrap_or(default)
}
