//! Exchange calculations for the doverka and broker modes.
//!
//! Every calculation is a pure function of a [`RateSnapshot`], the parsed
//! request and the commission settings. Nothing here performs I/O.
//!
//! [`RateSnapshot`]: crate::exchange::RateSnapshot

mod arith;
pub mod broker;
pub mod commission;
pub mod doverka;
pub mod engine;
pub mod error;
pub mod input;
pub mod result;
pub mod types;

#[cfg(test)]
mod props;

pub use broker::BrokerCalculator;
pub use commission::{Commission, CommissionTable};
pub use doverka::DoverkaCalculator;
pub use engine::{CalculationEngine, CalculatorSettings};
pub use error::CalculationError;
pub use input::{CalculationInput, NumericInput};
pub use result::{AppliedRates, CalculationResult, CommissionBreakdown};
pub use types::{
    BrokerScenario, CalculationRequest, CommissionLevel, Direction, DoverkaScenario, Method,
    Scenario,
};
