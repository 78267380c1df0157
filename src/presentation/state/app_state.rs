use std::sync::Arc;

use crate::application::ports::{AudioSource, NotesModel, TranscriptionEngine};
use crate::application::services::{NotesService, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<A, E, M>
where
    A: AudioSource,
    E: TranscriptionEngine,
    M: NotesModel,
{
    pub audio_source: Arc<A>,
    pub transcription_service: Arc<TranscriptionService<E>>,
    pub notes_service: Arc<NotesService<M>>,
    pub settings: Settings,
}

impl<A, E, M> Clone for AppState<A, E, M>
where
    A: AudioSource,
    E: TranscriptionEngine,
    M: NotesModel,
{
    fn clone(&self) -> Self {
        Self {
            audio_source: Arc::clone(&self.audio_source),
            transcription_service: Arc::clone(&self.transcription_service),
            notes_service: Arc::clone(&self.notes_service),
            settings: self.settings.clone(),
        }
    }
}
