//! Calculation error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Method;

/// Calculation-related errors.
///
/// Display strings are sent to API callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Amount missing, unparsable, zero or negative.
    #[error("Invalid amount")]
    InvalidAmount,

    /// Scenario not supported by the selected method. Only broker mode
    /// rejects scenarios; doverka falls back to `thb-to-rub`.
    #[error("Invalid scenario for {method}")]
    InvalidScenario {
        /// Method the scenario was requested for.
        method: Method,
    },

    /// Commission level is not `high`, `medium` or `low`.
    #[error("Invalid commission level")]
    InvalidCommissionLevel,

    /// Custom RUB/USDT rate unparsable, zero or negative.
    #[error("Invalid custom_rub_usdt")]
    InvalidCustomRate,

    /// Configured commission outside `[0, 100)`.
    #[error("Commission percent must be in [0, 100), got {0}")]
    InvalidCommissionPercent(Decimal),

    /// Intermediate value exceeded the decimal range.
    #[error("Calculation overflow")]
    Overflow,

    /// A rate or intermediate leg was zero.
    #[error("Division by zero in calculation")]
    DivisionByZero,
}

impl CalculationError {
    /// Returns true for the two rejections answered with 400. Every other
    /// failure, bad broker extras included, is a 500.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidAmount | Self::InvalidScenario { .. })
    }
}
