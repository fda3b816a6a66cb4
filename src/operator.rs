//! The four binary operators and their evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator applied to the two committed operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Multiplication,
    Division,
    Addition,
    Subtraction,
}

impl OperatorKind {
    /// Applies the operator to `a` and `b`.
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero yields an infinity, or NaN
    /// for `0 / 0`, and is never guarded against.
    pub fn calculate(self, a: f64, b: f64) -> f64 {
        match self {
            OperatorKind::Multiplication => a * b,
            OperatorKind::Division => a / b,
            OperatorKind::Addition => a + b,
            OperatorKind::Subtraction => a - b,
        }
    }

    /// Keypad symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Multiplication => "×",
            OperatorKind::Division => "÷",
            OperatorKind::Addition => "+",
            OperatorKind::Subtraction => "−",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_basic_operations() {
        assert_eq!(OperatorKind::Multiplication.calculate(6.0, 7.0), 42.0);
        assert_eq!(OperatorKind::Division.calculate(7.0, 2.0), 3.5);
        assert_eq!(OperatorKind::Addition.calculate(5.0, 3.0), 8.0);
        assert_eq!(OperatorKind::Subtraction.calculate(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_division_by_zero_is_not_guarded() {
        assert_eq!(OperatorKind::Division.calculate(1.0, 0.0), f64::INFINITY);
        assert_eq!(
            OperatorKind::Division.calculate(-1.0, 0.0),
            f64::NEG_INFINITY
        );
        assert!(OperatorKind::Division.calculate(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_uses_keypad_symbols() {
        assert_eq!(OperatorKind::Multiplication.to_string(), "×");
        assert_eq!(OperatorKind::Subtraction.to_string(), "−");
    }
}
