//! Wire form of a calculation request, before validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request body as sent by the calculator UI. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationInput {
    /// `doverka` or `broker`.
    #[serde(default)]
    pub method: Option<String>,
    /// Scenario wire name, e.g. `rub-to-thb`.
    #[serde(default)]
    pub scenario: Option<String>,
    /// `target` or `amount`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Amount to convert.
    #[serde(default)]
    pub amount: Option<NumericInput>,
    /// Manager-quoted RUB per USDT.
    #[serde(default)]
    pub custom_rub_usdt: Option<NumericInput>,
    /// `high`, `medium` or `low`.
    #[serde(default)]
    pub commission_level: Option<String>,
}

/// A numeric field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// JSON number.
    Number(serde_json::Number),
    /// JSON string such as `"1000.50"`.
    Text(String),
    /// Anything else; never parses.
    Other(serde_json::Value),
}

impl NumericInput {
    /// Converts to a decimal; `None` when the value is not numeric.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => parse_decimal(&number.to_string()),
            Self::Text(text) => parse_decimal(text.trim()),
            Self::Other(_) => None,
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
