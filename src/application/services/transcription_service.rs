use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::TranscriptionEngine;
use crate::domain::{ChunkTranscription, Transcript, split_into_chunks};

/// Drives the chunked transcription pipeline: split the audio buffer,
/// transcribe every chunk strictly in order, and collect the per-chunk
/// outcomes into a [`Transcript`].
///
/// A failed chunk never aborts the pipeline; its segment degrades to the
/// failure placeholder when the transcript is rendered. Chunks are never
/// retried and never skipped, so the transcript always carries one segment
/// per chunk.
pub struct TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    chunk_size: usize,
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    pub fn new(engine: Arc<E>, chunk_size: usize) -> Self {
        Self { engine, chunk_size }
    }

    #[tracing::instrument(skip(self, audio), fields(audio_bytes = audio.len()))]
    pub async fn run(&self, audio: Bytes) -> Transcript {
        let chunks = split_into_chunks(&audio, self.chunk_size);

        tracing::debug!(
            chunk_count = chunks.len(),
            chunk_size = self.chunk_size,
            "Audio split for transcription"
        );

        let mut segments = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            // One chunk awaited to completion before the next begins.
            match self.engine.transcribe(&chunk.data).await {
                Ok(text) => segments.push(ChunkTranscription::Transcribed(text)),
                Err(e) => {
                    tracing::warn!(
                        chunk_index = chunk.index,
                        chunk_bytes = chunk.data.len(),
                        error = %e,
                        "Chunk transcription failed, substituting placeholder"
                    );
                    segments.push(ChunkTranscription::Failed);
                }
            }
        }

        let transcript = Transcript::new(segments);

        tracing::info!(
            chunk_count = transcript.chunk_count(),
            failed_chunks = transcript.failed_chunk_count(),
            "Transcription pipeline completed"
        );

        transcript
    }
}
