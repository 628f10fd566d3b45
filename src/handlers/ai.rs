//! Chart analysis HTTP handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::server::AppState;

/// POST /AI/test2
///
/// The request body is the raw question text; the response is the provider's
/// response body passed through verbatim. Failures surface as a plain 500,
/// with the cause logged server-side.
pub async fn ask(State(state): State<AppState>, question: String) -> Response {
    match state.analyst.ask(&question).await {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "chat completion failed").into_response()
        }
    }
}
