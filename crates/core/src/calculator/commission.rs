//! Commission percentages and the tier table.

use rust_decimal::Decimal;

use super::arith;
use super::error::CalculationError;
use super::types::CommissionLevel;
use excalc_shared::CommissionConfig;

/// A commission expressed in percent, guaranteed to lie in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commission {
    percent: Decimal,
}

impl Commission {
    /// Validates and wraps a percentage.
    pub fn from_percent(percent: Decimal) -> Result<Self, CalculationError> {
        if percent.is_sign_negative() || percent >= Decimal::ONE_HUNDRED {
            return Err(CalculationError::InvalidCommissionPercent(percent));
        }
        Ok(Self { percent })
    }

    /// The percentage, e.g. `2.5`.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.percent
    }

    /// The percentage as a fraction, e.g. `0.025`.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.percent / Decimal::ONE_HUNDRED
    }

    /// Fee charged on `amount`.
    pub fn fee_on(self, amount: Decimal) -> Result<Decimal, CalculationError> {
        arith::mul(amount, self.fraction())
    }

    /// Splits a gross amount into `(net, fee)`.
    pub fn deduct(self, gross: Decimal) -> Result<(Decimal, Decimal), CalculationError> {
        let fee = self.fee_on(gross)?;
        Ok((arith::sub(gross, fee)?, fee))
    }

    /// Rate the broker pays out at when buying from the customer.
    pub fn sell_rate(self, market: Decimal) -> Result<Decimal, CalculationError> {
        arith::mul(market, Decimal::ONE - self.fraction())
    }

    /// Rate the broker charges when selling to the customer.
    pub fn buy_rate(self, market: Decimal) -> Result<Decimal, CalculationError> {
        arith::mul(market, Decimal::ONE + self.fraction())
    }
}

/// Broker spread per commission tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionTable {
    high: Commission,
    medium: Commission,
    low: Commission,
}

impl CommissionTable {
    /// Builds a table from tier percentages.
    pub fn new(high: Decimal, medium: Decimal, low: Decimal) -> Result<Self, CalculationError> {
        Ok(Self {
            high: Commission::from_percent(high)?,
            medium: Commission::from_percent(medium)?,
            low: Commission::from_percent(low)?,
        })
    }

    /// Commission for a tier.
    #[must_use]
    pub const fn get(&self, level: CommissionLevel) -> Commission {
        match level {
            CommissionLevel::High => self.high,
            CommissionLevel::Medium => self.medium,
            CommissionLevel::Low => self.low,
        }
    }
}

impl TryFrom<&CommissionConfig> for CommissionTable {
    type Error = CalculationError;

    fn try_from(config: &CommissionConfig) -> Result<Self, Self::Error> {
        Self::new(config.high_percent, config.medium_percent, config.low_percent)
    }
}
