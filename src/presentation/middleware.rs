use axum::Json;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Rejects requests whose `X-API-Key` header is absent or does not match the
/// configured secret. Runs before body parsing, so a rejected request never
/// reaches the pipeline or any outbound call.
pub async fn require_api_key(expected: String, request: Request, next: Next) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(expected.as_str()) {
        tracing::warn!(
            header_present = provided.is_some(),
            "Rejected request with missing or invalid API key"
        );
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Unauthorized Access".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
