mod http_audio_source;
mod workers_ai_whisper_engine;

pub use http_audio_source::HttpAudioSource;
pub use workers_ai_whisper_engine::WorkersAiWhisperEngine;
