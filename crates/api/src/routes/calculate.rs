//! Exchange calculation endpoint.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use excalc_core::calculator::{CalculationInput, CalculationResult};
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;

/// Validates the body, fetches fresh rates and runs the calculation.
///
/// Input is validated before any upstream request, so a bad amount never
/// costs a rate fetch.
async fn calculate(
    State(state): State<AppState>,
    body: Result<Json<CalculationInput>, JsonRejection>,
) -> ApiResult<Json<CalculationResult>> {
    let Json(input) = body?;
    let request = state.engine.parse(&input)?;
    let rates = state.rates.fetch_all().await?;
    let result = state.engine.compute(&rates, &request)?;

    info!(
        method = %result.method,
        scenario = ?result.scenario,
        from = %result.from_amount,
        to = %result.to_amount,
        "Calculated exchange"
    );

    Ok(Json(result))
}

/// Creates the calculate route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/calculate", post(calculate))
}
