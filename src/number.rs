//! Conversion between the raw input buffer and `f64` values.
//!
//! Parsing happens only at commit points. Formatting uses the shortest
//! round-trippable decimal form that `f64`'s `Display` produces, so results
//! never carry an exponent, grouping separators or trailing `.0`.

use crate::error::{EngineError, Result};
use std::str::FromStr;

/// Parses a committed buffer into a number.
///
/// # Errors
///
/// Returns [`EngineError::InvalidOperand`] for an empty buffer, a lone `.`,
/// or anything else `f64` rejects.
///
/// # Examples
///
/// ```
/// use keypad_calc::number::parse_operand;
///
/// assert_eq!(parse_operand("3.25").unwrap(), 3.25);
/// assert!(parse_operand(".").is_err());
/// ```
pub fn parse_operand(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidOperand {
            input: input.to_string(),
        });
    }
    f64::from_str(trimmed).map_err(|_| EngineError::InvalidOperand {
        input: input.to_string(),
    })
}

/// Formats a result for the display.
pub fn format_result(value: f64) -> String {
    value.to_string()
}
