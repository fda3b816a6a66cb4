//! Key events and the script rows that carry them.

use crate::operator::OperatorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single keystroke delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyEvent {
    /// One of `'0'..='9'`.
    Digit(char),

    DecimalPoint,

    Operator(OperatorKind),

    Equals,

    /// Backspace, or a full reset while a result is shown.
    Clear,
}

impl KeyEvent {
    /// Maps a keypad label onto an event.
    ///
    /// Labels are trimmed and matched case-insensitively. Returns `None` for
    /// labels no key carries.
    pub fn from_label(label: &str) -> Option<KeyEvent> {
        let label = label.trim().to_lowercase();

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Some(KeyEvent::Digit(c));
            }
        }

        match label.as_str() {
            "." => Some(KeyEvent::DecimalPoint),
            "x" | "*" | "×" => Some(KeyEvent::Operator(OperatorKind::Multiplication)),
            ":" | "/" | "÷" => Some(KeyEvent::Operator(OperatorKind::Division)),
            "+" => Some(KeyEvent::Operator(OperatorKind::Addition)),
            "-" | "−" => Some(KeyEvent::Operator(OperatorKind::Subtraction)),
            "=" => Some(KeyEvent::Equals),
            "delete" | "del" | "c" | "clear" | "backspace" => Some(KeyEvent::Clear),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEvent::Digit(d) => write!(f, "{}", d),
            KeyEvent::DecimalPoint => f.write_str("."),
            KeyEvent::Operator(op) => write!(f, "{}", op),
            KeyEvent::Equals => f.write_str("="),
            KeyEvent::Clear => f.write_str("Delete"),
        }
    }
}

/// Raw key script row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct KeyRecord {
    /// Keypad label, e.g. `7`, `.`, `x`, `=`, `Delete`
    pub key: String,
}

impl KeyRecord {
    /// Parses the raw CSV record into a key event.
    ///
    /// Returns `None` if the label is not a known key.
    pub fn parse(&self) -> Option<KeyEvent> {
        KeyEvent::from_label(&self.key)
    }
}
