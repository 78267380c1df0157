use async_trait::async_trait;

#[async_trait]
pub trait NotesModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, NotesModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotesModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
