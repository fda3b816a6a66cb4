//! Engine configuration.
//!
//! Both knobs cover behavior that keypad hosts disagree on; the defaults keep
//! the permissive, silent behavior.

use clap::ValueEnum;
use serde::Deserialize;

/// When a decimal point may be typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalPointPolicy {
    /// Append `.` unless the buffer already has one, even into an empty buffer.
    #[default]
    AllowLeading,

    /// Additionally require at least one character in the buffer.
    RequireLeadingDigit,
}

/// What the display shows when a commit fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorDisplay {
    /// Swallow the failure; the display does not advance.
    #[default]
    Silent,

    /// Freeze [`ERROR_TEXT`] as the shown result.
    Show,
}

/// Text shown for a failed commit under [`ErrorDisplay::Show`].
pub const ERROR_TEXT: &str = "Error";

/// Behavior switches for a [`crate::CalculatorEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub decimal_point: DecimalPointPolicy,
    pub error_display: ErrorDisplay,
}

impl EngineConfig {
    pub fn new(decimal_point: DecimalPointPolicy, error_display: ErrorDisplay) -> Self {
        EngineConfig {
            decimal_point,
            error_display,
        }
    }
}
