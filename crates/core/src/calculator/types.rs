//! Request vocabulary: methods, scenarios, directions and commission tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CalculationError;
use crate::exchange::Currency;

/// Calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Trusted intermediary with a flat fee, both rates from the market.
    Doverka,
    /// Broker with a tiered spread and a manager-supplied RUB/USDT rate.
    Broker,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Doverka => write!(f, "doverka"),
            Self::Broker => write!(f, "broker"),
        }
    }
}

impl Method {
    /// Reads the wire name. Anything other than `broker` runs as doverka.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        if name == "broker" {
            Self::Broker
        } else {
            Self::Doverka
        }
    }
}

/// Currency pair and direction of a conversion, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// RUB in, THB out.
    RubToThb,
    /// THB in, RUB out.
    ThbToRub,
    /// THB in, USDT out.
    ThbToUsdt,
    /// USDT in, THB out.
    UsdtToThb,
}

impl Scenario {
    /// Parses a wire name; `None` for anything unrecognised.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rub-to-thb" => Some(Self::RubToThb),
            "thb-to-rub" => Some(Self::ThbToRub),
            "thb-to-usdt" => Some(Self::ThbToUsdt),
            "usdt-to-thb" => Some(Self::UsdtToThb),
            _ => None,
        }
    }

    /// Currency the customer hands over.
    #[must_use]
    pub const fn from_currency(self) -> Currency {
        match self {
            Self::RubToThb => Currency::Rub,
            Self::ThbToRub | Self::ThbToUsdt => Currency::Thb,
            Self::UsdtToThb => Currency::Usdt,
        }
    }

    /// Currency the customer receives.
    #[must_use]
    pub const fn to_currency(self) -> Currency {
        match self {
            Self::RubToThb | Self::UsdtToThb => Currency::Thb,
            Self::ThbToRub => Currency::Rub,
            Self::ThbToUsdt => Currency::Usdt,
        }
    }

    /// `(base, quote)` of the rate shown to users: quote units per one base unit.
    ///
    /// RUB pairs are quoted as RUB per THB, USDT pairs as THB per USDT.
    #[must_use]
    pub const fn rate_quote(self) -> (Currency, Currency) {
        match self {
            Self::RubToThb | Self::ThbToRub => (Currency::Thb, Currency::Rub),
            Self::ThbToUsdt | Self::UsdtToThb => (Currency::Usdt, Currency::Thb),
        }
    }
}

/// Scenarios the doverka mode supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoverkaScenario {
    /// RUB in, THB out.
    RubToThb,
    /// THB in, RUB out.
    ThbToRub,
}

impl DoverkaScenario {
    /// Reads the wire name. Only `rub-to-thb` converts into THB; every other
    /// name, known or not, converts THB into RUB.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        if name == "rub-to-thb" {
            Self::RubToThb
        } else {
            Self::ThbToRub
        }
    }
}

impl From<DoverkaScenario> for Scenario {
    fn from(scenario: DoverkaScenario) -> Self {
        match scenario {
            DoverkaScenario::RubToThb => Self::RubToThb,
            DoverkaScenario::ThbToRub => Self::ThbToRub,
        }
    }
}

/// Scenarios the broker mode supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerScenario {
    /// RUB in, THB out (via USDT at the custom rate).
    RubToThb,
    /// THB in, USDT out.
    ThbToUsdt,
    /// USDT in, THB out.
    UsdtToThb,
}

impl TryFrom<Scenario> for BrokerScenario {
    type Error = CalculationError;

    fn try_from(scenario: Scenario) -> Result<Self, Self::Error> {
        match scenario {
            Scenario::RubToThb => Ok(Self::RubToThb),
            Scenario::ThbToUsdt => Ok(Self::ThbToUsdt),
            Scenario::UsdtToThb => Ok(Self::UsdtToThb),
            Scenario::ThbToRub => Err(CalculationError::InvalidScenario {
                method: Method::Broker,
            }),
        }
    }
}

impl From<BrokerScenario> for Scenario {
    fn from(scenario: BrokerScenario) -> Self {
        match scenario {
            BrokerScenario::RubToThb => Self::RubToThb,
            BrokerScenario::ThbToUsdt => Self::ThbToUsdt,
            BrokerScenario::UsdtToThb => Self::UsdtToThb,
        }
    }
}

/// Which side of the conversion the given amount refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Amount is the desired output; solve for the input.
    Target,
    /// Amount is the input; solve for the output.
    #[default]
    Amount,
}

impl Direction {
    /// Reads the wire name. Only an exact `target` solves for the input.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        if name == "target" {
            Self::Target
        } else {
            Self::Amount
        }
    }
}

/// Broker commission tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionLevel {
    /// Widest spread.
    High,
    /// Default spread.
    Medium,
    /// Narrowest spread.
    Low,
}

impl std::str::FromStr for CommissionLevel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(CalculationError::InvalidCommissionLevel),
        }
    }
}

/// A validated calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationRequest {
    /// Doverka conversion; always amount-based.
    Doverka {
        /// Pair and direction.
        scenario: DoverkaScenario,
        /// Input amount, strictly positive.
        amount: Decimal,
    },
    /// Broker conversion.
    Broker {
        /// Pair and direction.
        scenario: BrokerScenario,
        /// Whether `amount` is the input or the desired output.
        direction: Direction,
        /// Strictly positive.
        amount: Decimal,
        /// RUB per USDT quoted by the manager, strictly positive.
        custom_rub_usdt: Decimal,
        /// Spread tier.
        commission_level: CommissionLevel,
    },
}

impl CalculationRequest {
    /// Method this request runs under.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Doverka { .. } => Method::Doverka,
            Self::Broker { .. } => Method::Broker,
        }
    }

    /// Wire scenario.
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        match self {
            Self::Doverka { scenario, .. } => (*scenario).into(),
            Self::Broker { scenario, .. } => (*scenario).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("rub-to-thb", Some(Scenario::RubToThb))]
    #[case("thb-to-rub", Some(Scenario::ThbToRub))]
    #[case("thb-to-usdt", Some(Scenario::ThbToUsdt))]
    #[case("usdt-to-thb", Some(Scenario::UsdtToThb))]
    #[case("rub_to_thb", None)]
    #[case("RUB-TO-THB", None)]
    #[case("", None)]
    fn test_scenario_from_name(#[case] name: &str, #[case] expected: Option<Scenario>) {
        assert_eq!(Scenario::from_name(name), expected);
    }

    #[test]
    fn test_scenario_wire_names_round_trip_through_serde() {
        let value = serde_json::to_value(Scenario::ThbToUsdt).unwrap();
        assert_eq!(value, serde_json::json!("thb-to-usdt"));
    }

    #[test]
    fn test_broker_rejects_thb_to_rub() {
        assert_eq!(
            BrokerScenario::try_from(Scenario::ThbToRub),
            Err(CalculationError::InvalidScenario {
                method: Method::Broker
            })
        );
    }

    #[rstest]
    #[case("rub-to-thb", DoverkaScenario::RubToThb)]
    #[case("thb-to-rub", DoverkaScenario::ThbToRub)]
    #[case("thb-to-usdt", DoverkaScenario::ThbToRub)]
    #[case("usdt-to-thb", DoverkaScenario::ThbToRub)]
    #[case("anything", DoverkaScenario::ThbToRub)]
    fn test_doverka_scenario_falls_back_to_thb_to_rub(
        #[case] name: &str,
        #[case] expected: DoverkaScenario,
    ) {
        assert_eq!(DoverkaScenario::from_wire(name), expected);
    }

    #[rstest]
    #[case("broker", Method::Broker)]
    #[case("doverka", Method::Doverka)]
    #[case("Broker", Method::Doverka)]
    #[case("p2p", Method::Doverka)]
    fn test_method_from_wire(#[case] name: &str, #[case] expected: Method) {
        assert_eq!(Method::from_wire(name), expected);
    }

    #[rstest]
    #[case("target", Direction::Target)]
    #[case("amount", Direction::Amount)]
    #[case("Target", Direction::Amount)]
    #[case("up", Direction::Amount)]
    fn test_direction_from_wire(#[case] name: &str, #[case] expected: Direction) {
        assert_eq!(Direction::from_wire(name), expected);
    }

    #[test]
    fn test_commission_level_parsing() {
        assert_eq!(CommissionLevel::from_str("low").unwrap(), CommissionLevel::Low);
        assert_eq!(
            CommissionLevel::from_str("extreme"),
            Err(CalculationError::InvalidCommissionLevel)
        );
    }

    #[test]
    fn test_rate_quote_orientation() {
        assert_eq!(Scenario::RubToThb.rate_quote(), (Currency::Thb, Currency::Rub));
        assert_eq!(Scenario::ThbToRub.rate_quote(), (Currency::Thb, Currency::Rub));
        assert_eq!(Scenario::UsdtToThb.rate_quote(), (Currency::Usdt, Currency::Thb));
    }
}
