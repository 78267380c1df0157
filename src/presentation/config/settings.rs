use serde::Deserialize;

use crate::domain::DEFAULT_CHUNK_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    pub workers_ai: WorkersAiSettings,
    pub transcription: TranscriptionSettings,
    pub notes: NotesSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub response_variant: ResponseVariant,
}

/// Shape of the success response: the plain-text transcript alone, or a JSON
/// body carrying both the structured notes and the full transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseVariant {
    Transcript,
    #[default]
    Notes,
}

/// Optional inbound API-key gate; `None` leaves the notes endpoint open.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiSettings {
    pub base_url: String,
    pub account_id: String,
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub model: String,
    #[serde(default = "default_chunk_size")]
    pub chunk_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotesSettings {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
    pub enable_json: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
