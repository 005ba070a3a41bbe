//! Landing page and whitelisted UI assets.

use std::convert::Infallible;

use axum::{
    Router,
    body::Body,
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile, fs::ServeFileSystemResponseBody};
use tracing::debug;

use crate::AppState;

/// Suffixes served from the static directory. Matching is case-sensitive.
const SERVABLE_EXTENSIONS: [&str; 8] = [
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico",
];

/// Returns true when `filename` may be served as a static asset.
#[must_use]
pub fn is_servable(filename: &str) -> bool {
    !filename.starts_with("api")
        && SERVABLE_EXTENSIONS
            .iter()
            .any(|extension| filename.ends_with(extension))
}

async fn index(State(state): State<AppState>, request: Request) -> Response {
    let index = ServeFile::new(state.static_dir.join("index.html"));
    into_response(index.oneshot(request).await)
}

async fn asset(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Response {
    if !is_servable(&filename) {
        debug!(%filename, "Refusing to serve file");
        return StatusCode::NOT_FOUND.into_response();
    }

    // ServeDir resolves the request path itself and rejects `..` segments.
    let files = ServeDir::new(state.static_dir.as_path());
    into_response(files.oneshot(request).await)
}

fn into_response(
    result: Result<axum::http::Response<ServeFileSystemResponseBody>, Infallible>,
) -> Response {
    match result {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// Creates the landing page and asset routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{*filename}", get(asset))
}
