//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod assets;
pub mod calculate;
pub mod health;
pub mod info;
pub mod rates;

/// `(method, path, description)` of every endpoint, for the startup banner.
pub const ENDPOINTS: [(&str, &str, &str); 4] = [
    ("GET", "/", "calculator page"),
    ("GET", "/api/rates", "current USDT/THB and RUB/USDT"),
    ("POST", "/api/calculate", "exchange calculation"),
    ("GET", "/api/health", "health check"),
];

/// Creates the router with every endpoint.
///
/// Static paths win over the asset catch-all, so `/api/...` endpoints are
/// never shadowed by files.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(info::routes())
        .merge(health::routes())
        .merge(rates::routes())
        .merge(calculate::routes())
        .merge(assets::routes())
}
