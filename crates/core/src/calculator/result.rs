//! Calculation result returned to API callers.

use rust_decimal::Decimal;
use serde::Serialize;

use super::arith;
use super::commission::Commission;
use super::error::CalculationError;
use super::types::{CommissionLevel, Direction, Method, Scenario};
use crate::exchange::Currency;

/// Decimal places for displayed rates.
const RATE_DECIMAL_PLACES: u32 = 4;

/// Full breakdown of a conversion.
///
/// Amounts are rounded to their currency's precision; rates to 4 places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Mode used.
    pub method: Method,
    /// Pair and direction of the conversion.
    pub scenario: Scenario,
    /// Whether the request fixed the input or the output.
    pub direction: Direction,
    /// Currency handed over.
    pub from_currency: Currency,
    /// Amount handed over.
    #[serde(with = "rust_decimal::serde::float")]
    pub from_amount: Decimal,
    /// Currency received.
    pub to_currency: Currency,
    /// Amount received.
    #[serde(with = "rust_decimal::serde::float")]
    pub to_amount: Decimal,
    /// USDT moved through the intermediate leg, for two-hop conversions.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub usdt_amount: Option<Decimal>,
    /// Rate actually obtained, commission included.
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_rate: Decimal,
    /// Rate before commission.
    #[serde(with = "rust_decimal::serde::float")]
    pub market_rate: Decimal,
    /// Unit of both rates, e.g. `RUB per THB`.
    pub rate_unit: String,
    /// Commission applied.
    pub commission: CommissionBreakdown,
    /// Rates the calculation ran on.
    pub rates: AppliedRates,
}

/// Commission part of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionBreakdown {
    /// Broker tier; absent in doverka mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CommissionLevel>,
    /// Percentage applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub percent: Decimal,
    /// Commission amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency the commission is counted in.
    pub currency: Currency,
}

/// Input rates echoed back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedRates {
    /// THB per USDT.
    #[serde(with = "rust_decimal::serde::float")]
    pub usdt_thb: Decimal,
    /// RUB per USDT (market or custom, depending on mode).
    #[serde(with = "rust_decimal::serde::float")]
    pub rub_usdt: Decimal,
}

/// Unrounded legs of one conversion, produced by the calculators.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Conversion {
    pub scenario: Scenario,
    pub direction: Direction,
    pub from_amount: Decimal,
    pub to_amount: Decimal,
    pub usdt_amount: Option<Decimal>,
    /// Quote units per base unit, see [`Scenario::rate_quote`].
    pub market_rate: Decimal,
    pub commission_amount: Decimal,
    pub commission_currency: Currency,
}

impl Conversion {
    fn amount_in(&self, currency: Currency) -> Decimal {
        if currency == self.scenario.from_currency() {
            self.from_amount
        } else {
            self.to_amount
        }
    }

    /// Rounds the legs and assembles the caller-facing result.
    pub(crate) fn finish(
        self,
        method: Method,
        level: Option<CommissionLevel>,
        commission: Commission,
        rates: AppliedRates,
    ) -> Result<CalculationResult, CalculationError> {
        let (base, quote) = self.scenario.rate_quote();
        // Amounts below decimal precision can underflow a leg to zero.
        let base_amount = self.amount_in(base);
        let effective_rate = if base_amount.is_zero() {
            Decimal::ZERO
        } else {
            arith::div(self.amount_in(quote), base_amount)?
        };
        let from_currency = self.scenario.from_currency();
        let to_currency = self.scenario.to_currency();

        Ok(CalculationResult {
            method,
            scenario: self.scenario,
            direction: self.direction,
            from_currency,
            from_amount: from_currency.round(self.from_amount),
            to_currency,
            to_amount: to_currency.round(self.to_amount),
            usdt_amount: self.usdt_amount.map(|usdt| Currency::Usdt.round(usdt)),
            effective_rate: effective_rate.round_dp(RATE_DECIMAL_PLACES),
            market_rate: self.market_rate.round_dp(RATE_DECIMAL_PLACES),
            rate_unit: format!("{quote} per {base}"),
            commission: CommissionBreakdown {
                level,
                percent: commission.percent(),
                amount: self.commission_currency.round(self.commission_amount),
                currency: self.commission_currency,
            },
            rates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_finish_rounds_and_orients_rate() {
        let conversion = Conversion {
            scenario: Scenario::RubToThb,
            direction: Direction::Amount,
            from_amount: dec!(1000),
            to_amount: dec!(362.5678),
            usdt_amount: Some(dec!(12.3456789)),
            market_rate: dec!(2.70123456),
            commission_amount: dec!(7.3999),
            commission_currency: Currency::Thb,
        };
        let result = conversion
            .finish(
                Method::Broker,
                Some(CommissionLevel::Medium),
                Commission::from_percent(dec!(2)).unwrap(),
                AppliedRates {
                    usdt_thb: dec!(30),
                    rub_usdt: dec!(81),
                },
            )
            .unwrap();

        assert_eq!(result.to_amount, dec!(362.57));
        assert_eq!(result.usdt_amount, Some(dec!(12.3457)));
        assert_eq!(result.effective_rate, dec!(2.7581));
        assert_eq!(result.market_rate, dec!(2.7012));
        assert_eq!(result.rate_unit, "RUB per THB");
        assert_eq!(result.commission.amount, dec!(7.40));
    }

    #[test]
    fn test_zero_base_leg_reports_zero_rate() {
        let conversion = Conversion {
            scenario: Scenario::RubToThb,
            direction: Direction::Amount,
            from_amount: dec!(0.0000000000000000000000000001),
            to_amount: Decimal::ZERO,
            usdt_amount: Some(Decimal::ZERO),
            market_rate: dec!(2.7031),
            commission_amount: Decimal::ZERO,
            commission_currency: Currency::Thb,
        };
        let result = conversion
            .finish(
                Method::Doverka,
                None,
                Commission::from_percent(dec!(2.5)).unwrap(),
                AppliedRates {
                    usdt_thb: dec!(31.16),
                    rub_usdt: dec!(84.2271),
                },
            )
            .unwrap();

        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert_eq!(result.to_amount, Decimal::ZERO);
    }

    #[test]
    fn test_serialized_shape() {
        let conversion = Conversion {
            scenario: Scenario::UsdtToThb,
            direction: Direction::Target,
            from_amount: dec!(10),
            to_amount: dec!(294),
            usdt_amount: None,
            market_rate: dec!(30),
            commission_amount: dec!(6),
            commission_currency: Currency::Thb,
        };
        let result = conversion
            .finish(
                Method::Broker,
                Some(CommissionLevel::Medium),
                Commission::from_percent(dec!(2)).unwrap(),
                AppliedRates {
                    usdt_thb: dec!(30),
                    rub_usdt: dec!(90),
                },
            )
            .unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "method": "broker",
                "scenario": "usdt-to-thb",
                "direction": "target",
                "from_currency": "USDT",
                "from_amount": 10.0,
                "to_currency": "THB",
                "to_amount": 294.0,
                "effective_rate": 29.4,
                "market_rate": 30.0,
                "rate_unit": "THB per USDT",
                "commission": {
                    "level": "medium",
                    "percent": 2.0,
                    "amount": 6.0,
                    "currency": "THB"
                },
                "rates": {"usdt_thb": 30.0, "rub_usdt": 90.0}
            })
        );
    }
}
