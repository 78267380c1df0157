use bytes::Bytes;

/// Default chunk size for transcription requests: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 1_048_576;

/// One contiguous slice of the source audio, the unit of transcription work.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub data: Bytes,
}

/// Splits `audio` into consecutive chunks of at most `chunk_size` bytes.
///
/// Chunks cover the buffer exactly once, in order, with no overlap and no
/// gaps; the final chunk may be shorter. An empty buffer yields no chunks.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn split_into_chunks(audio: &Bytes, chunk_size: usize) -> Vec<AudioChunk> {
    assert!(chunk_size > 0, "chunk_size must be positive");

    let mut chunks = Vec::with_capacity(audio.len().div_ceil(chunk_size));
    let mut start = 0;
    while start < audio.len() {
        let end = usize::min(start + chunk_size, audio.len());
        chunks.push(AudioChunk {
            index: chunks.len(),
            data: audio.slice(start..end),
        });
        start = end;
    }
    chunks
}
