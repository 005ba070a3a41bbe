//! Exchange calculator server.
//!
//! Main entry point for the RUB/THB/USDT calculator API and its UI.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use excalc_api::routes::ENDPOINTS;
use excalc_api::{AppState, create_router};
use excalc_core::calculator::{CalculationEngine, CalculatorSettings};
use excalc_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let default_filter = if config.server.debug {
        "excalc=debug,tower_http=debug"
    } else {
        "excalc=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rates = excalc_rates::from_config(&config.rates)?;
    info!(provider = ?config.rates.provider, base_url = %config.rates.base_url, "Rate source configured");

    let engine = CalculationEngine::new(
        CalculatorSettings::try_from(&config.commission)
            .context("Invalid commission configuration")?,
    );
    let settings = engine.settings();
    info!(
        doverka = %settings.doverka.percent(),
        default_level = ?settings.default_level,
        default_rub_usdt = %settings.default_rub_usdt,
        "Commission settings loaded"
    );

    let state = AppState::new(rates, engine, &config.server.static_dir);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    for (method, path, description) in ENDPOINTS {
        info!("  {method:<4} {path:<15} {description}");
    }
    if config.server.debug {
        info!("Debug mode enabled");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
