//! Current market rates.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use excalc_core::exchange::RateSnapshot;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Body sent when the provider is down: the error plus the fallback rates.
#[derive(Debug, Serialize)]
pub struct FallbackRates {
    /// Provider failure message.
    pub error: String,
    /// Fallback THB per USDT.
    #[serde(with = "rust_decimal::serde::float")]
    pub usdt_thb: Decimal,
    /// Fallback RUB per USDT.
    #[serde(with = "rust_decimal::serde::float")]
    pub rub_usdt: Decimal,
}

impl FallbackRates {
    fn new(error: String) -> Self {
        let fallback = RateSnapshot::fallback();
        Self {
            error,
            usdt_thb: fallback.usdt_thb,
            rub_usdt: fallback.rub_usdt,
        }
    }
}

async fn get_rates(State(state): State<AppState>) -> Response {
    match state.rates.fetch_all().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            warn!(error = %e, timeout = e.is_timeout(), "Rate fetch failed, serving fallback rates");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FallbackRates::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Creates the rates route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/rates", get(get_rates))
}
