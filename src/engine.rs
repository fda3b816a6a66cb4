//! Core keystroke engine.
//!
//! Accumulates typed characters into a raw buffer, commits the buffer into a
//! [`PendingCalculation`] when an operator or equals is pressed, and derives
//! the display from either the buffer or the last frozen result.

use crate::config::{DecimalPointPolicy, EngineConfig, ErrorDisplay, ERROR_TEXT};
use crate::error::Result;
use crate::key::KeyEvent;
use crate::number::{format_result, parse_operand};
use crate::operator::OperatorKind;
use crate::pending::PendingCalculation;
use log::debug;
use serde::Serialize;

/// Immutable view of the engine after an event.
///
/// Hosts render from this value instead of reading engine fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Text to render: the shown result if any, else the raw buffer.
    pub display: String,

    /// Operand currently being typed.
    pub buffer: String,

    /// Whether `display` is a frozen result rather than the buffer echo.
    pub result_shown: bool,

    pub operand1: Option<f64>,
    pub operand2: Option<f64>,
    pub operator: Option<OperatorKind>,
}

/// The calculator engine.
///
/// Single-threaded; a host dispatching from several threads must put each
/// instance behind one mutex.
///
/// # Display
///
/// At most one of {buffer, shown result} drives the display. Typing a digit or
/// decimal point drops the shown result.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    /// Operand being typed, not yet committed.
    buffer: String,

    /// Committed operands and operator.
    pending: PendingCalculation,

    /// Frozen result string, present until the next digit or clear.
    shown_result: Option<String>,

    config: EngineConfig,
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        CalculatorEngine {
            buffer: String::new(),
            pending: PendingCalculation::Empty,
            shown_result: None,
            config,
        }
    }

    /// Dispatches a key event, swallowing recoverable failures.
    ///
    /// Always returns the snapshot after the event; a rejected commit leaves
    /// it identical to the one before.
    pub fn apply(&mut self, event: KeyEvent) -> Snapshot {
        let outcome = match event {
            KeyEvent::Digit(d) => Ok(self.digit(d)),
            KeyEvent::DecimalPoint => Ok(self.decimal_point()),
            KeyEvent::Operator(op) => self.set_operator(op),
            KeyEvent::Equals => self.equals(),
            KeyEvent::Clear => Ok(self.delete_or_clear()),
        };

        match outcome {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!("Key {} rejected: {}", event, e);
                if self.config.error_display == ErrorDisplay::Show {
                    self.shown_result = Some(ERROR_TEXT.to_string());
                }
                self.snapshot()
            }
        }
    }

    /// Appends a digit, dropping any shown result.
    ///
    /// Characters outside `'0'..='9'` are ignored.
    pub fn digit(&mut self, d: char) -> Snapshot {
        if !d.is_ascii_digit() {
            debug!("Ignoring non-digit {:?}", d);
            return self.snapshot();
        }

        self.shown_result = None;
        self.buffer.push(d);
        self.snapshot()
    }

    /// Appends `.` unless the buffer already has one.
    ///
    /// Under [`DecimalPointPolicy::RequireLeadingDigit`] an empty buffer also
    /// rejects the point.
    pub fn decimal_point(&mut self) -> Snapshot {
        if self.buffer.contains('.') {
            debug!("Ignoring second decimal point in {:?}", self.buffer);
            return self.snapshot();
        }
        if self.buffer.is_empty()
            && self.config.decimal_point == DecimalPointPolicy::RequireLeadingDigit
        {
            debug!("Ignoring leading decimal point");
            return self.snapshot();
        }

        self.shown_result = None;
        self.buffer.push('.');
        self.snapshot()
    }

    /// Commits the buffer and records `op` as the pending operator.
    ///
    /// If the commit completes the pending calculation, it is evaluated first
    /// and the result becomes `operand1` (chained evaluation, so `5 + 3 +`
    /// shows `8`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidOperand`] if the buffer does not parse;
    /// no state is changed in that case.
    pub fn set_operator(&mut self, op: OperatorKind) -> Result<Snapshot> {
        if self.buffer.is_empty() && self.shown_result.is_none() {
            debug!("Ignoring operator {} with nothing to operate on", op);
            return Ok(self.snapshot());
        }

        let mut pending = self.pending.commit(parse_operand(&self.buffer)?);

        if let Some(value) = pending.evaluate() {
            debug!("Chained {:?} evaluated to {}", pending, value);
            pending = PendingCalculation::First(value);
            self.shown_result = Some(format_result(value));
        }

        self.pending = pending.with_operator(op);
        self.buffer.clear();
        Ok(self.snapshot())
    }

    /// Commits the buffer and evaluates the calculation if it is complete.
    ///
    /// An incomplete calculation keeps the commit and the buffer, and leaves
    /// the display as it was.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidOperand`] if the buffer does not parse;
    /// no state is changed in that case.
    pub fn equals(&mut self) -> Result<Snapshot> {
        if self.buffer.is_empty() {
            debug!("Ignoring equals on empty buffer");
            return Ok(self.snapshot());
        }

        let pending = self.pending.commit(parse_operand(&self.buffer)?);

        match pending.evaluate() {
            Some(value) => {
                debug!("Evaluated {:?} to {}", pending, value);
                self.shown_result = Some(format_result(value));
                self.pending = PendingCalculation::Empty;
                self.buffer.clear();
            }
            None => {
                debug!("Equals left incomplete calculation {:?}", pending);
                self.pending = pending;
            }
        }

        Ok(self.snapshot())
    }

    /// Full reset while a result is shown, otherwise a backspace.
    pub fn delete_or_clear(&mut self) -> Snapshot {
        if self.shown_result.is_some() {
            self.reset();
        } else if self.buffer.pop().is_none() {
            debug!("Ignoring clear on empty buffer");
        }
        self.snapshot()
    }

    /// Text the host should render.
    pub fn display_text(&self) -> &str {
        self.shown_result.as_deref().unwrap_or(&self.buffer)
    }

    pub fn pending(&self) -> &PendingCalculation {
        &self.pending
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display_text().to_string(),
            buffer: self.buffer.clone(),
            result_shown: self.shown_result.is_some(),
            operand1: self.pending.operand1(),
            operand2: self.pending.operand2(),
            operator: self.pending.operator(),
        }
    }

    fn reset(&mut self) {
        self.shown_result = None;
        self.buffer.clear();
        self.pending = PendingCalculation::Empty;
    }
}
