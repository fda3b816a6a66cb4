//! # Keypad Calculator Engine
//!
//! A keystroke-driven calculator core: digits, a decimal point, four binary
//! operators, equals and delete/clear are folded into a running two-operand
//! calculation and a display string.
//!
//! ## Design Principles
//!
//! - **No display dependency**: every event returns an immutable [`Snapshot`]
//! - **Atomic commits**: a buffer that fails to parse changes nothing
//! - **IEEE-754 arithmetic**: `1 ÷ 0` displays `inf`, it is not an error
//! - **Chained evaluation**: `5 + 3 + 2 =` shows `8` at the second `+`, then `10`
//!
//! ## Example
//!
//! ```
//! use keypad_calc::{CalculatorEngine, KeyEvent, OperatorKind};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.apply(KeyEvent::Digit('5'));
//! engine.apply(KeyEvent::Operator(OperatorKind::Addition));
//! engine.apply(KeyEvent::Digit('3'));
//! let snapshot = engine.apply(KeyEvent::Equals);
//! assert_eq!(snapshot.display, "8");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod number;
pub mod operator;
pub mod pending;
pub mod script;

pub use config::{DecimalPointPolicy, EngineConfig, ErrorDisplay};
pub use engine::{CalculatorEngine, Snapshot};
pub use error::{EngineError, Result};
pub use key::{KeyEvent, KeyRecord};
pub use operator::OperatorKind;
pub use pending::PendingCalculation;
pub use script::{ScriptRunner, TranscriptEntry};
