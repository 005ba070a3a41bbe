//! Endpoint listing.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Exchange Calculator API",
        "version": "1.0.0",
        "endpoints": {
            "/api/rates": "GET - Получить актуальные курсы",
            "/api/calculate": "POST - Рассчитать обмен",
            "/api/health": "GET - Проверка здоровья",
        }
    }))
}

/// Creates the `/api` info route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api", get(api_info))
}
