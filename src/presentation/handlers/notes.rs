use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioSource, NotesModel, TranscriptionEngine};
use crate::infrastructure::observability::{redact_url, sanitize_transcript};
use crate::presentation::config::ResponseVariant;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct NotesRequest {
    #[serde(rename = "audioUrl", default)]
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
pub struct NotesResponse {
    #[serde(rename = "structuredNotes")]
    pub structured_notes: String,
    #[serde(rename = "fullTranscript")]
    pub full_transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Runs the fetch -> chunked transcription -> notes pipeline for one request.
///
/// Per-chunk transcription failures degrade the transcript in place; a notes
/// generation failure aborts the request with a generic 500.
#[tracing::instrument(skip(state, payload))]
pub async fn notes_handler<A, E, M>(
    State(state): State<AppState<A, E, M>>,
    payload: Result<Json<NotesRequest>, JsonRejection>,
) -> impl IntoResponse
where
    A: AudioSource + 'static,
    E: TranscriptionEngine + 'static,
    M: NotesModel + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Rejected notes request body");
            let message = match rejection {
                JsonRejection::MissingJsonContentType(_) => "Unsupported Content-Type".to_string(),
                other => format!("Invalid JSON body: {}", other.body_text()),
            };
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };

    // An empty audioUrl is treated the same as a missing field.
    let audio_url = match request.audio_url.filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => {
            tracing::warn!("Notes request without audioUrl");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing 'audioUrl' in request body".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(audio_url = %redact_url(&audio_url), "Processing notes request");

    let audio = match state.audio_source.fetch(&audio_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Audio fetch failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch audio".to_string(),
                }),
            )
                .into_response();
        }
    };

    let transcript = state.transcription_service.run(audio).await;
    let full_transcript = transcript.render();

    tracing::debug!(transcript = %sanitize_transcript(&full_transcript), "Transcript assembled");

    match state.settings.server.response_variant {
        ResponseVariant::Transcript => {
            tracing::info!(
                chunk_count = transcript.chunk_count(),
                failed_chunks = transcript.failed_chunk_count(),
                "Returning transcript"
            );
            (StatusCode::OK, full_transcript).into_response()
        }
        ResponseVariant::Notes => match state.notes_service.summarize(&full_transcript).await {
            Ok(structured_notes) => {
                tracing::info!(
                    chunk_count = transcript.chunk_count(),
                    failed_chunks = transcript.failed_chunk_count(),
                    "Returning structured notes"
                );
                (
                    StatusCode::OK,
                    Json(NotesResponse {
                        structured_notes,
                        full_transcript,
                    }),
                )
                    .into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "Notes generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        },
    }
}

/// Fallback for unsupported methods on the notes endpoint.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Only POST requests are allowed".to_string(),
        }),
    )
}
