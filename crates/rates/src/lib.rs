//! Live exchange rate sources.
//!
//! Every request fetches a fresh [`RateSnapshot`]; nothing is cached and a
//! failed fetch is never retried. Callers decide how to degrade.
//!
//! [`RateSnapshot`]: excalc_core::exchange::RateSnapshot

pub mod binance;
pub mod error;
pub mod fixed;
pub mod source;

pub use binance::BinanceRateSource;
pub use error::RateSourceError;
pub use fixed::FixedRateSource;
pub use source::{RateSource, from_config};
