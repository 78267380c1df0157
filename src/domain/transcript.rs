/// Placeholder substituted for a chunk whose transcription failed.
pub const TRANSCRIPTION_FAILURE_PLACEHOLDER: &str = "[Error transcribing chunk]";

/// Outcome of transcribing one audio chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkTranscription {
    Transcribed(String),
    Failed,
}

/// Ordered per-chunk transcription outcomes for one audio file.
///
/// Segments are stored in chunk order; rendering joins them with a single
/// newline, substituting [`TRANSCRIPTION_FAILURE_PLACEHOLDER`] for failed
/// segments, so a transcript of N chunks always renders to N lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    segments: Vec<ChunkTranscription>,
}

impl Transcript {
    pub fn new(segments: Vec<ChunkTranscription>) -> Self {
        Self { segments }
    }

    pub fn chunk_count(&self) -> usize {
        self.segments.len()
    }

    pub fn failed_chunk_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, ChunkTranscription::Failed))
            .count()
    }

    pub fn segments(&self) -> &[ChunkTranscription] {
        &self.segments
    }

    pub fn render(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                ChunkTranscription::Transcribed(text) => text.as_str(),
                ChunkTranscription::Failed => TRANSCRIPTION_FAILURE_PLACEHOLDER,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
