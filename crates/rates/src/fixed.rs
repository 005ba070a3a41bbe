//! Constant rates, for offline development and tests.

use async_trait::async_trait;
use excalc_core::exchange::RateSnapshot;
use rust_decimal::Decimal;

use crate::error::RateSourceError;
use crate::source::RateSource;

/// Always returns the same rates, stamped with the current time.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource {
    usdt_thb: Decimal,
    rub_usdt: Decimal,
}

impl FixedRateSource {
    /// Creates a source serving the given rates.
    #[must_use]
    pub const fn new(usdt_thb: Decimal, rub_usdt: Decimal) -> Self {
        Self { usdt_thb, rub_usdt }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_all(&self) -> Result<RateSnapshot, RateSourceError> {
        Ok(RateSnapshot::now(self.usdt_thb, self.rub_usdt))
    }
}
