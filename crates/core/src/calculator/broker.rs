//! Broker mode: USDT/THB from the market, RUB/USDT quoted by the manager,
//! commission charged as a spread around the market USDT/THB rate.
//!
//! Every scenario has an `amount` form (input known, solve output) and a
//! `target` form (output known, solve input); the two are exact inverses
//! before rounding.

use rust_decimal::Decimal;

use super::arith;
use super::commission::Commission;
use super::error::CalculationError;
use super::result::{AppliedRates, CalculationResult, Conversion};
use super::types::{BrokerScenario, CommissionLevel, Direction, Method, Scenario};
use crate::exchange::Currency;

/// Calculator for the broker mode.
#[derive(Debug, Clone, Copy)]
pub struct BrokerCalculator {
    usdt_thb: Decimal,
    custom_rub_usdt: Decimal,
    level: CommissionLevel,
    commission: Commission,
}

impl BrokerCalculator {
    /// Creates a calculator for one request.
    #[must_use]
    pub const fn new(
        usdt_thb: Decimal,
        custom_rub_usdt: Decimal,
        level: CommissionLevel,
        commission: Commission,
    ) -> Self {
        Self {
            usdt_thb,
            custom_rub_usdt,
            level,
            commission,
        }
    }

    /// Dispatches to the operation for a scenario and direction.
    pub fn calculate(
        &self,
        scenario: BrokerScenario,
        direction: Direction,
        amount: Decimal,
    ) -> Result<CalculationResult, CalculationError> {
        match (scenario, direction) {
            (BrokerScenario::RubToThb, Direction::Amount) => self.rub_to_thb_amount(amount),
            (BrokerScenario::RubToThb, Direction::Target) => self.rub_to_thb_target(amount),
            (BrokerScenario::ThbToUsdt, Direction::Amount) => self.thb_to_usdt_amount(amount),
            (BrokerScenario::ThbToUsdt, Direction::Target) => self.thb_to_usdt_target(amount),
            (BrokerScenario::UsdtToThb, Direction::Amount) => self.usdt_to_thb_amount(amount),
            (BrokerScenario::UsdtToThb, Direction::Target) => self.usdt_to_thb_target(amount),
        }
    }

    /// RUB given, THB received.
    pub fn rub_to_thb_amount(&self, rub: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(rub, self.custom_rub_usdt)?;
        let thb = arith::mul(usdt, self.sell_rate()?)?;
        self.rub_to_thb(Direction::Amount, rub, usdt, thb)
    }

    /// THB wanted, RUB required.
    pub fn rub_to_thb_target(&self, thb: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(thb, self.sell_rate()?)?;
        let rub = arith::mul(usdt, self.custom_rub_usdt)?;
        self.rub_to_thb(Direction::Target, rub, usdt, thb)
    }

    /// USDT given, THB received.
    pub fn usdt_to_thb_amount(&self, usdt: Decimal) -> Result<CalculationResult, CalculationError> {
        let thb = arith::mul(usdt, self.sell_rate()?)?;
        self.usdt_to_thb(Direction::Amount, usdt, thb)
    }

    /// THB wanted, USDT required.
    pub fn usdt_to_thb_target(&self, thb: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(thb, self.sell_rate()?)?;
        self.usdt_to_thb(Direction::Target, usdt, thb)
    }

    /// THB given, USDT received.
    pub fn thb_to_usdt_amount(&self, thb: Decimal) -> Result<CalculationResult, CalculationError> {
        let usdt = arith::div(thb, self.buy_rate()?)?;
        self.thb_to_usdt(Direction::Amount, thb, usdt)
    }

    /// USDT wanted, THB required.
    pub fn thb_to_usdt_target(&self, usdt: Decimal) -> Result<CalculationResult, CalculationError> {
        let thb = arith::mul(usdt, self.buy_rate()?)?;
        self.thb_to_usdt(Direction::Target, thb, usdt)
    }

    fn sell_rate(&self) -> Result<Decimal, CalculationError> {
        self.commission.sell_rate(self.usdt_thb)
    }

    fn buy_rate(&self) -> Result<Decimal, CalculationError> {
        self.commission.buy_rate(self.usdt_thb)
    }

    fn at_market(&self, usdt: Decimal) -> Result<Decimal, CalculationError> {
        arith::mul(usdt, self.usdt_thb)
    }

    fn rub_to_thb(
        &self,
        direction: Direction,
        rub: Decimal,
        usdt: Decimal,
        thb: Decimal,
    ) -> Result<CalculationResult, CalculationError> {
        self.finish(Conversion {
            scenario: Scenario::RubToThb,
            direction,
            from_amount: rub,
            to_amount: thb,
            usdt_amount: Some(usdt),
            market_rate: arith::div(self.custom_rub_usdt, self.usdt_thb)?,
            commission_amount: arith::sub(self.at_market(usdt)?, thb)?,
            commission_currency: Currency::Thb,
        })
    }

    fn usdt_to_thb(
        &self,
        direction: Direction,
        usdt: Decimal,
        thb: Decimal,
    ) -> Result<CalculationResult, CalculationError> {
        self.finish(Conversion {
            scenario: Scenario::UsdtToThb,
            direction,
            from_amount: usdt,
            to_amount: thb,
            usdt_amount: None,
            market_rate: self.usdt_thb,
            commission_amount: arith::sub(self.at_market(usdt)?, thb)?,
            commission_currency: Currency::Thb,
        })
    }

    fn thb_to_usdt(
        &self,
        direction: Direction,
        thb: Decimal,
        usdt: Decimal,
    ) -> Result<CalculationResult, CalculationError> {
        self.finish(Conversion {
            scenario: Scenario::ThbToUsdt,
            direction,
            from_amount: thb,
            to_amount: usdt,
            usdt_amount: None,
            market_rate: self.usdt_thb,
            commission_amount: arith::sub(thb, self.at_market(usdt)?)?,
            commission_currency: Currency::Thb,
        })
    }

    fn finish(&self, conversion: Conversion) -> Result<CalculationResult, CalculationError> {
        conversion.finish(
            Method::Broker,
            Some(self.level),
            self.commission,
            AppliedRates {
                usdt_thb: self.usdt_thb,
                rub_usdt: self.custom_rub_usdt,
            },
        )
    }
}
