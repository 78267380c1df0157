use async_trait::async_trait;
use bytes::Bytes;
use reqwest::redirect;

use crate::application::ports::{AudioSource, AudioSourceError};
use crate::infrastructure::observability::redact_url;

const MAX_REDIRECTS: usize = 10;

/// Fetches caller-supplied audio URLs over HTTP(S), following redirects.
pub struct HttpAudioSource {
    client: reqwest::Client,
}

impl HttpAudioSource {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { client }
    }
}

impl Default for HttpAudioSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSource for HttpAudioSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, AudioSourceError> {
        tracing::debug!(url = %redact_url(url), "Fetching audio");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AudioSourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, url = %redact_url(url), "Audio source returned non-success status");
            return Err(AudioSourceError::UpstreamStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioSourceError::RequestFailed(format!("read body: {}", e)))?;

        tracing::info!(bytes = bytes.len(), "Audio fetched");

        Ok(bytes)
    }
}
