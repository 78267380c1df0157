use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, AudioSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
}
