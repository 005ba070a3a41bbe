//! Currencies handled by the calculator.
//!
//! CRITICAL: Rounding strategy:
//! - Always round to the currency's decimal places
//! - Use banker's rounding (round half to even)
//! - Only round final amounts, never intermediate legs

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currencies supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian Ruble
    Rub,
    /// Thai Baht
    Thb,
    /// Tether
    Usdt,
}

impl Currency {
    /// Number of decimal places amounts are quoted with.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Rub | Self::Thb => 2,
            Self::Usdt => 4,
        }
    }

    /// Rounds an amount to this currency's precision using banker's rounding.
    #[must_use]
    pub fn round(self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.decimal_places(), RoundingStrategy::MidpointNearestEven)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rub => write!(f, "RUB"),
            Self::Thb => write!(f, "THB"),
            Self::Usdt => write!(f, "USDT"),
        }
    }
}
