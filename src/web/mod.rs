// Web server — Axum-based JSON API around the analysis pipeline.
//
// POST /api/check-toxicity takes {"text": "..."} and returns the Verdict.
// GET / serves a small embedded page that calls the API; GET /health is the
// liveness probe. No state is kept between requests.

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::pipeline::verdict::Analyzer;

pub mod handlers;

// Embedded at compile time so the binary serves the page without a
// static asset directory.
static INDEX_HTML: &str = include_str!("../../web/index.html");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: &Config, analyzer: Analyzer) -> Result<()> {
    let app = build_router(AppState { analyzer });

    let addr = format!("{}:{}", config.bind, config.port);
    info!("Smolder listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(
            "/api/check-toxicity",
            post(handlers::check::check_toxicity),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
