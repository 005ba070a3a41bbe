//! Calculation engine: validates wire input and runs the selected mode.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::broker::BrokerCalculator;
use super::commission::{Commission, CommissionTable};
use super::doverka::DoverkaCalculator;
use super::error::CalculationError;
use super::input::{CalculationInput, NumericInput};
use super::result::CalculationResult;
use super::types::{
    BrokerScenario, CalculationRequest, CommissionLevel, Direction, DoverkaScenario, Method,
    Scenario,
};
use crate::exchange::RateSnapshot;
use excalc_shared::CommissionConfig;

/// Commission settings and broker defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorSettings {
    /// Fee deducted in doverka mode.
    pub doverka: Commission,
    /// Broker spread per tier.
    pub commission: CommissionTable,
    /// RUB/USDT used when a broker request omits one.
    pub default_rub_usdt: Decimal,
    /// Tier used when a broker request omits one.
    pub default_level: CommissionLevel,
}

impl TryFrom<&CommissionConfig> for CalculatorSettings {
    type Error = CalculationError;

    fn try_from(config: &CommissionConfig) -> Result<Self, Self::Error> {
        let default_level = CommissionLevel::from_str(&config.default_level)?;
        if config.default_rub_usdt <= Decimal::ZERO {
            return Err(CalculationError::InvalidCustomRate);
        }

        Ok(Self {
            doverka: Commission::from_percent(config.doverka_percent)?,
            commission: CommissionTable::try_from(config)?,
            default_rub_usdt: config.default_rub_usdt,
            default_level,
        })
    }
}

/// Stateless engine shared by all requests.
#[derive(Debug, Clone)]
pub struct CalculationEngine {
    settings: CalculatorSettings,
}

impl CalculationEngine {
    /// Creates an engine.
    #[must_use]
    pub const fn new(settings: CalculatorSettings) -> Self {
        Self { settings }
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Validates wire input into a request.
    ///
    /// The amount is checked first, so a non-positive amount is reported
    /// regardless of the other fields. Missing fields take the defaults:
    /// `doverka`, `rub-to-thb`, `amount`, and the configured broker rate
    /// and tier. Unknown methods run as doverka, unknown doverka scenarios
    /// as `thb-to-rub` and unknown directions as `amount`; only an unknown
    /// broker scenario is rejected.
    pub fn parse(&self, input: &CalculationInput) -> Result<CalculationRequest, CalculationError> {
        let amount = match &input.amount {
            Some(amount) => amount.to_decimal().ok_or(CalculationError::InvalidAmount)?,
            None => Decimal::ZERO,
        };
        if amount <= Decimal::ZERO {
            return Err(CalculationError::InvalidAmount);
        }

        let method = Method::from_wire(input.method.as_deref().unwrap_or("doverka"));
        let scenario = input.scenario.as_deref().unwrap_or("rub-to-thb");

        match method {
            Method::Doverka => Ok(CalculationRequest::Doverka {
                scenario: DoverkaScenario::from_wire(scenario),
                amount,
            }),
            Method::Broker => {
                let scenario = Scenario::from_name(scenario)
                    .ok_or(CalculationError::InvalidScenario { method })
                    .and_then(BrokerScenario::try_from)?;
                let direction = input
                    .direction
                    .as_deref()
                    .map_or_else(Direction::default, Direction::from_wire);
                let custom_rub_usdt = self.custom_rate(input.custom_rub_usdt.as_ref())?;
                let commission_level = match input.commission_level.as_deref() {
                    Some(level) => CommissionLevel::from_str(level)?,
                    None => self.settings.default_level,
                };

                Ok(CalculationRequest::Broker {
                    scenario,
                    direction,
                    amount,
                    custom_rub_usdt,
                    commission_level,
                })
            }
        }
    }

    fn custom_rate(&self, input: Option<&NumericInput>) -> Result<Decimal, CalculationError> {
        let Some(input) = input else {
            return Ok(self.settings.default_rub_usdt);
        };
        match input.to_decimal() {
            Some(rate) if rate > Decimal::ZERO => Ok(rate),
            _ => Err(CalculationError::InvalidCustomRate),
        }
    }

    /// Runs a validated request against a rate snapshot.
    ///
    /// Broker mode only reads `usdt_thb` from the snapshot; RUB/USDT comes
    /// from the request.
    pub fn compute(
        &self,
        rates: &RateSnapshot,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculationError> {
        match *request {
            CalculationRequest::Doverka { scenario, amount } => {
                DoverkaCalculator::new(rates.usdt_thb, rates.rub_usdt, self.settings.doverka)
                    .calculate(scenario, amount)
            }
            CalculationRequest::Broker {
                scenario,
                direction,
                amount,
                custom_rub_usdt,
                commission_level,
            } => BrokerCalculator::new(
                rates.usdt_thb,
                custom_rub_usdt,
                commission_level,
                self.settings.commission.get(commission_level),
            )
            .calculate(scenario, direction, amount),
        }
    }
}
