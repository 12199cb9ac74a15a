//! # Operator Input Parsing
//!
//! Calculators receive numbers as raw text from a form field. These helpers
//! turn that text into finite `f64` values or an `InvalidInput` error naming
//! the field, so no calculation ever sees NaN or infinity.

use crate::errors::{CalcError, CalcResult};

/// Parse a required numeric field.
///
/// Leading and trailing whitespace is ignored. Empty text, text that is not a
/// decimal number, and non-finite values ("NaN", "inf") are rejected.
///
/// # Example
///
/// ```rust
/// use elec_core::parse::parse_number;
///
/// assert_eq!(parse_number("current_a", " 20 ").unwrap(), 20.0);
/// assert!(parse_number("current_a", "twenty").is_err());
/// ```
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, raw, "A value is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, raw, "Not a number"))?;
    ensure_finite(field, value)
}

/// Parse a numeric field that must be strictly positive.
pub fn parse_positive(field: &str, raw: &str) -> CalcResult<f64> {
    let value = parse_number(field, raw)?;
    ensure_positive(field, value)
}

/// Parse a numeric field that must be zero or greater.
pub fn parse_non_negative(field: &str, raw: &str) -> CalcResult<f64> {
    let value = parse_number(field, raw)?;
    ensure_non_negative(field, value)
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

/// Reject values that are not finite and strictly greater than zero.
pub fn ensure_positive(field: &str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be greater than zero"))
    }
}

/// Reject values that are not finite or are negative.
pub fn ensure_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("x", "1.5").unwrap(), 1.5);
        assert_eq!(parse_number("x", "-3").unwrap(), -3.0);
        assert_eq!(parse_number("x", "\t42\n").unwrap(), 42.0);
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "1,5", "12A", "NaN", "inf", "-infinity"] {
            let err = parse_number("current_a", raw).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "raw = {raw:?}");
        }
    }

    #[test]
    fn test_error_names_field() {
        match parse_number("length_m", "ten") {
            Err(CalcError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "length_m");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_positive_and_non_negative() {
        assert!(parse_positive("x", "0").is_err());
        assert!(parse_positive("x", "-1").is_err());
        assert_eq!(parse_positive("x", "0.001").unwrap(), 0.001);

        assert_eq!(parse_non_negative("x", "0").unwrap(), 0.0);
        assert!(parse_non_negative("x", "-0.5").is_err());
    }
}
