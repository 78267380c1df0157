use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Transcription adapter for the Workers AI REST gateway.
///
/// Submits one chunk per request as a base64-encoded JSON body and reads the
/// transcription text out of the standard `{ result, success, errors }`
/// envelope.
pub struct WorkersAiWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl WorkersAiWhisperEngine {
    pub fn new(base_url: &str, account_id: &str, api_token: &str, model: &str) -> Self {
        let endpoint = format!(
            "{}/accounts/{}/ai/run/{}",
            base_url.trim_end_matches('/'),
            account_id,
            model,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token: api_token.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionEnvelope {
    result: Option<TranscriptionResult>,
    success: bool,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct TranscriptionResult {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[async_trait]
impl TranscriptionEngine for WorkersAiWhisperEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        let body = serde_json::json!({
            "audio": general_purpose::STANDARD.encode(audio_data),
        });

        tracing::debug!(
            endpoint = %self.endpoint,
            audio_bytes = audio_data.len(),
            "Sending audio chunk to Workers AI Whisper"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let envelope: TranscriptionEnvelope = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        if !envelope.success {
            let detail = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "model run failed: {}",
                detail
            )));
        }

        let text = envelope
            .result
            .and_then(|r| r.text)
            .ok_or_else(|| {
                TranscriptionError::InvalidResponse(
                    "missing 'text' in transcription result".to_string(),
                )
            })?;

        tracing::info!(chars = text.len(), "Workers AI Whisper transcription completed");

        Ok(text)
    }
}
