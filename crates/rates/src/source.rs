//! The rate source seam between the API and market data providers.

use std::sync::Arc;

use async_trait::async_trait;
use excalc_core::exchange::RateSnapshot;
use excalc_shared::{RateProviderKind, RatesConfig};

use crate::binance::BinanceRateSource;
use crate::error::RateSourceError;
use crate::fixed::FixedRateSource;

/// Supplies current USDT/THB and RUB/USDT quotes.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches both quotes. Each call hits the provider again.
    async fn fetch_all(&self) -> Result<RateSnapshot, RateSourceError>;
}

/// Builds the configured rate source.
pub fn from_config(config: &RatesConfig) -> Result<Arc<dyn RateSource>, RateSourceError> {
    Ok(match config.provider {
        RateProviderKind::Binance => Arc::new(BinanceRateSource::from_config(config)?),
        RateProviderKind::Fixed => Arc::new(FixedRateSource::new(
            config.fixed_usdt_thb,
            config.fixed_rub_usdt,
        )),
    })
}
