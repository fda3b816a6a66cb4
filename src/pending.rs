//! The pending two-operand calculation.
//!
//! Fields are only ever set, never cleared one at a time; the record is reset
//! wholesale after an evaluation or a full clear.

use crate::operator::OperatorKind;

/// Committed operands and operator awaiting evaluation.
///
/// Each variant names which of `operand1`, `operand2` and `operator` are
/// present. `FirstSecond` arises when two operands are committed with no
/// operator in between (e.g. `5 = 3 =`).
///
/// # Invariants
///
/// - Only [`PendingCalculation::Complete`] can be evaluated
/// - `operand1` is present in every variant except `Empty`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingCalculation {
    #[default]
    Empty,
    First(f64),
    FirstOp(f64, OperatorKind),
    FirstSecond(f64, f64),
    Complete(f64, OperatorKind, f64),
}

impl PendingCalculation {
    /// Stores `value` into `operand1` if absent, otherwise into `operand2`.
    ///
    /// An already-present `operand2` is overwritten.
    pub fn commit(self, value: f64) -> Self {
        match self {
            PendingCalculation::Empty => PendingCalculation::First(value),
            PendingCalculation::First(a) | PendingCalculation::FirstSecond(a, _) => {
                PendingCalculation::FirstSecond(a, value)
            }
            PendingCalculation::FirstOp(a, op) | PendingCalculation::Complete(a, op, _) => {
                PendingCalculation::Complete(a, op, value)
            }
        }
    }

    /// Records `op`, replacing any previous operator.
    ///
    /// An empty record has no operand to attach the operator to and is
    /// returned unchanged.
    pub fn with_operator(self, op: OperatorKind) -> Self {
        match self {
            PendingCalculation::Empty => PendingCalculation::Empty,
            PendingCalculation::First(a) | PendingCalculation::FirstOp(a, _) => {
                PendingCalculation::FirstOp(a, op)
            }
            PendingCalculation::FirstSecond(a, b) | PendingCalculation::Complete(a, _, b) => {
                PendingCalculation::Complete(a, op, b)
            }
        }
    }

    /// Evaluates a complete record, or returns `None` if anything is missing.
    pub fn evaluate(&self) -> Option<f64> {
        match *self {
            PendingCalculation::Complete(a, op, b) => Some(op.calculate(a, b)),
            _ => None,
        }
    }

    /// Returns `true` when both operands and the operator are present.
    pub fn is_complete(&self) -> bool {
        matches!(self, PendingCalculation::Complete(..))
    }

    pub fn operand1(&self) -> Option<f64> {
        match *self {
            PendingCalculation::Empty => None,
            PendingCalculation::First(a)
            | PendingCalculation::FirstOp(a, _)
            | PendingCalculation::FirstSecond(a, _)
            | PendingCalculation::Complete(a, _, _) => Some(a),
        }
    }

    pub fn operand2(&self) -> Option<f64> {
        match *self {
            PendingCalculation::FirstSecond(_, b) | PendingCalculation::Complete(_, _, b) => {
                Some(b)
            }
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<OperatorKind> {
        match *self {
            PendingCalculation::FirstOp(_, op) | PendingCalculation::Complete(_, op, _) => {
                Some(op)
            }
            _ => None,
        }
    }
}
