mod audio_source;
mod notes_model;
mod transcription_engine;

pub use audio_source::{AudioSource, AudioSourceError};
pub use notes_model::{NotesModel, NotesModelError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
