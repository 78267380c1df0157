mod audio_chunk;
mod transcript;

pub use audio_chunk::{AudioChunk, DEFAULT_CHUNK_SIZE, split_into_chunks};
pub use transcript::{ChunkTranscription, TRANSCRIPTION_FAILURE_PLACEHOLDER, Transcript};
