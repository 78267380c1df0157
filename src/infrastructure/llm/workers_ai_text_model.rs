use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{NotesModel, NotesModelError};

/// Text-generation adapter for the Workers AI REST gateway.
pub struct WorkersAiTextModel {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl WorkersAiTextModel {
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

#[derive(Serialize)]
struct GenerationRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerationEnvelope {
    result: Option<GenerationResult>,
    success: bool,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct GenerationResult {
    response: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[async_trait]
impl NotesModel for WorkersAiTextModel {
    async fn generate(&self, prompt: &str) -> Result<String, NotesModelError> {
        let request_body = GenerationRequest { prompt };

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.len(),
            "Sending prompt to Workers AI text model"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| NotesModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NotesModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotesModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let envelope: GenerationEnvelope = response
            .json()
            .await
            .map_err(|e| NotesModelError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            let detail = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(NotesModelError::ApiRequestFailed(format!(
                "model run failed: {}",
                detail
            )));
        }

        envelope
            .result
            .and_then(|r| r.response)
            .ok_or_else(|| {
                NotesModelError::InvalidResponse(
                    "missing 'response' in generation result".to_string(),
                )
            })
    }
}
