//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - JSON endpoints for rates and calculations
//! - Whitelisted static asset serving
//! - Error to response mapping

pub mod error;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use excalc_core::calculator::CalculationEngine;
use excalc_rates::RateSource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Market rate provider, queried on every request.
    pub rates: Arc<dyn RateSource>,
    /// Calculation engine with the configured commission settings.
    pub engine: Arc<CalculationEngine>,
    /// Directory holding `index.html` and the UI assets.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(
        rates: Arc<dyn RateSource>,
        engine: CalculationEngine,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rates,
            engine: Arc::new(engine),
            static_dir: Arc::new(static_dir.into()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::app_routes()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
