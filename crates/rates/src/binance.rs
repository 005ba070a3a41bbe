//! Binance spot ticker client.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use excalc_core::exchange::RateSnapshot;
use excalc_shared::RatesConfig;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::RateSourceError;
use crate::source::RateSource;

const TICKER_PATH: &str = "/api/v3/ticker/price";

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: String,
}

/// Fetches USDT/THB and RUB/USDT from `GET /api/v3/ticker/price`.
///
/// Both symbols are quoted as fiat per USDT, e.g. `USDTTHB` and `USDTRUB`.
#[derive(Debug, Clone)]
pub struct BinanceRateSource {
    client: reqwest::Client,
    base_url: String,
    usdt_thb_symbol: String,
    rub_usdt_symbol: String,
}

impl BinanceRateSource {
    /// Creates a client with a bounded request timeout.
    pub fn new(
        base_url: &str,
        usdt_thb_symbol: &str,
        rub_usdt_symbol: &str,
        timeout: Duration,
    ) -> Result<Self, RateSourceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("excalc/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(RateSourceError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            usdt_thb_symbol: usdt_thb_symbol.to_string(),
            rub_usdt_symbol: rub_usdt_symbol.to_string(),
        })
    }

    /// Creates a client from the `rates` config section.
    pub fn from_config(config: &RatesConfig) -> Result<Self, RateSourceError> {
        Self::new(
            &config.base_url,
            &config.usdt_thb_symbol,
            &config.rub_usdt_symbol,
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[instrument(name = "TickerFetch", skip(self))]
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, RateSourceError> {
        let url = format!("{}{}", self.base_url, TICKER_PATH);
        debug!(%url, "Requesting ticker price");

        let request_error = |source| RateSourceError::Request {
            symbol: symbol.to_string(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(RateSourceError::Status {
                symbol: symbol.to_string(),
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await.map_err(request_error)?;
        let ticker: TickerPrice =
            serde_json::from_str(&text).map_err(|_| RateSourceError::InvalidPrice {
                symbol: symbol.to_string(),
                price: text.clone(),
            })?;

        let parsed = Decimal::from_str(ticker.price.trim());
        match parsed {
            Ok(price) if price > Decimal::ZERO => {
                debug!(%price, "Received ticker price");
                Ok(price.normalize())
            }
            _ => Err(RateSourceError::InvalidPrice {
                symbol: symbol.to_string(),
                price: ticker.price,
            }),
        }
    }
}

#[async_trait]
impl RateSource for BinanceRateSource {
    async fn fetch_all(&self) -> Result<RateSnapshot, RateSourceError> {
        let (usdt_thb, rub_usdt) = tokio::try_join!(
            self.fetch_price(&self.usdt_thb_symbol),
            self.fetch_price(&self.rub_usdt_symbol),
        )?;
        Ok(RateSnapshot::now(usdt_thb, rub_usdt))
    }
}
