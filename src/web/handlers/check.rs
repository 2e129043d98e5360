// POST /api/check-toxicity — analyze one text.
//
// Returns 200 with the Verdict JSON.
// Returns 400 if the body is not JSON or has no string `text` field; every
// JSON rejection maps to the same message.
// Returns 500 if analysis fails; no partial verdict is sent.
//
// Analysis is CPU-bound, so it runs on the blocking pool.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use crate::pipeline::verdict::ANALYSIS_FAILED;
use crate::web::{api_error, AppState};

pub const INVALID_REQUEST: &str = "Invalid request. Text is required.";

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub text: String,
}

/// POST /api/check-toxicity
pub async fn check_toxicity(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Response {
    let text = match payload {
        Ok(Json(body)) => body.text,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Rejected check request without text");
            return api_error(StatusCode::BAD_REQUEST, INVALID_REQUEST);
        }
    };

    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await;

    match result {
        Ok(Ok(verdict)) => Json(verdict).into_response(),
        Ok(Err(e)) => {
            error!(error = ?e, "Error analyzing text");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
        }
        Err(e) => {
            error!(error = %e, "Analysis task did not complete");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
        }
    }
}
