//! Doverka mode: two-hop conversion through USDT at market rates with a
//! flat fee taken from the converted amount.

use rust_decimal::Decimal;

use super::arith;
use super::commission::Commission;
use super::error::CalculationError;
use super::result::{AppliedRates, CalculationResult, Conversion};
use super::types::{Direction, DoverkaScenario, Method, Scenario};
use crate::exchange::Currency;

/// Calculator for the doverka mode.
#[derive(Debug, Clone, Copy)]
pub struct DoverkaCalculator {
    usdt_thb: Decimal,
    rub_usdt: Decimal,
    commission: Commission,
}

impl DoverkaCalculator {
    /// Creates a calculator over market rates.
    #[must_use]
    pub const fn new(usdt_thb: Decimal, rub_usdt: Decimal, commission: Commission) -> Self {
        Self {
            usdt_thb,
            rub_usdt,
            commission,
        }
    }

    /// Runs the conversion for a scenario.
    pub fn calculate(
        &self,
        scenario: DoverkaScenario,
        amount: Decimal,
    ) -> Result<CalculationResult, CalculationError> {
        match scenario {
            DoverkaScenario::RubToThb => self.rub_to_thb(amount),
            DoverkaScenario::ThbToRub => self.thb_to_rub(amount),
        }
    }

    /// RUB → USDT → THB; fee deducted in THB.
    pub fn rub_to_thb(&self, rub: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(rub, self.rub_usdt)?;
        let gross = arith::mul(usdt, self.usdt_thb)?;
        let (thb, fee) = self.commission.deduct(gross)?;

        self.finish(Conversion {
            scenario: Scenario::RubToThb,
            direction: Direction::Amount,
            from_amount: rub,
            to_amount: thb,
            usdt_amount: Some(usdt),
            market_rate: self.rub_per_thb()?,
            commission_amount: fee,
            commission_currency: Currency::Thb,
        })
    }

    /// THB → USDT → RUB; fee deducted in RUB.
    pub fn thb_to_rub(&self, thb: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(thb, self.usdt_thb)?;
        let gross = arith::mul(usdt, self.rub_usdt)?;
        let (rub, fee) = self.commission.deduct(gross)?;

        self.finish(Conversion {
            scenario: Scenario::ThbToRub,
            direction: Direction::Amount,
            from_amount: thb,
            to_amount: rub,
            usdt_amount: Some(usdt),
            market_rate: self.rub_per_thb()?,
            commission_amount: fee,
            commission_currency: Currency::Rub,
        })
    }

    fn rub_per_thb(&self) -> Result<Decimal, CalculationError> {
        arith::div(self.rub_usdt, self.usdt_thb)
    }

    fn finish(&self, conversion: Conversion) -> Result<CalculationResult, CalculationError> {
        conversion.finish(
            Method::Doverka,
            None,
            self.commission,
            AppliedRates {
                usdt_thb: self.usdt_thb,
                rub_usdt: self.rub_usdt,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculator(percent: Decimal) -> DoverkaCalculator {
        DoverkaCalculator::new(dec!(30), dec!(90), Commission::from_percent(percent).unwrap())
    }

    #[test]
    fn test_rub_to_thb() {
        // 900 RUB / 90 = 10 USDT * 30 = 300 THB, 2% fee = 6 THB
        let result = calculator(dec!(2)).rub_to_thb(dec!(900)).unwrap();
        assert_eq!(result.from_currency, Currency::Rub);
        assert_eq!(result.from_amount, dec!(900));
        assert_eq!(result.to_currency, Currency::Thb);
        assert_eq!(result.to_amount, dec!(294));
        assert_eq!(result.usdt_amount, Some(dec!(10)));
        assert_eq!(result.commission.amount, dec!(6));
        assert_eq!(result.commission.currency, Currency::Thb);
        assert_eq!(result.commission.level, None);
        assert_eq!(result.market_rate, dec!(3));
        assert_eq!(result.effective_rate, dec!(3.0612));
        assert_eq!(result.direction, Direction::Amount);
    }

    #[test]
    fn test_thb_to_rub() {
        // 300 THB / 30 = 10 USDT * 90 = 900 RUB, 2% fee = 18 RUB
        let result = calculator(dec!(2)).thb_to_rub(dec!(300)).unwrap();
        assert_eq!(result.to_currency, Currency::Rub);
        assert_eq!(result.to_amount, dec!(882));
        assert_eq!(result.commission.amount, dec!(18));
        assert_eq!(result.commission.currency, Currency::Rub);
        assert_eq!(result.effective_rate, dec!(2.94));
    }

    #[test]
    fn test_zero_commission_is_plain_cross_rate() {
        let result = calculator(dec!(0)).rub_to_thb(dec!(900)).unwrap();
        assert_eq!(result.to_amount, dec!(300));
        assert_eq!(result.commission.amount, dec!(0));
        assert_eq!(result.effective_rate, result.market_rate);
    }

    #[test]
    fn test_fallback_rates_example_is_deterministic() {
        // 1000 / 84.2271 * 31.16 = 369.9522, minus 2.5% = 360.7034
        let calc = DoverkaCalculator::new(
            dec!(31.16),
            dec!(84.2271),
            Commission::from_percent(dec!(2.5)).unwrap(),
        );
        let first = calc.rub_to_thb(dec!(1000)).unwrap();
        let second = calc.rub_to_thb(dec!(1000)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_amount, dec!(360.70));
        assert_eq!(first.usdt_amount, Some(dec!(11.8727)));
    }

    #[test]
    fn test_amount_below_precision_converts_to_zero() {
        let calc = DoverkaCalculator::new(
            dec!(31.16),
            dec!(84.2271),
            Commission::from_percent(dec!(2.5)).unwrap(),
        );
        let result = calc.rub_to_thb(dec!(0.0000000000000000000000000001)).unwrap();
        assert_eq!(result.to_amount, Decimal::ZERO);
        assert_eq!(result.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_is_an_error() {
        let calc = DoverkaCalculator::new(
            dec!(30),
            Decimal::ZERO,
            Commission::from_percent(dec!(2)).unwrap(),
        );
        assert_eq!(
            calc.rub_to_thb(dec!(900)),
            Err(CalculationError::DivisionByZero)
        );
    }
}
