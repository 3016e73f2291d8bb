//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Parse a user-typed token amount, degrading to zero instead of failing.
///
/// Empty, unparseable, non-finite and negative input all yield `0.0`.
///
/// ```rust
/// use lib_utils::validation::parse_amount;
///
/// assert_eq!(parse_amount("500"), 500.0);
/// assert_eq!(parse_amount(" 12.5 "), 12.5);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("SOL", "currency").is_ok());
        assert_eq!(
            validate_not_empty("  ", "currency"),
            Err("currency cannot be empty".to_string())
        );
    }

    #[test]
    fn test_parse_amount_degrades_to_zero() {
        for input in ["", "   ", "abc", "12abc", "NaN", "inf", "-infinity", "-5", "-0"] {
            assert_eq!(parse_amount(input), 0.0, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("0"), 0.0);
        assert_eq!(parse_amount("1000"), 1000.0);
        assert_eq!(parse_amount("0.25"), 0.25);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }
}
