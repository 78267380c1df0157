mod notes_service;
mod transcription_service;

pub use notes_service::{NotesError, NotesService, build_notes_prompt};
pub use transcription_service::TranscriptionService;
