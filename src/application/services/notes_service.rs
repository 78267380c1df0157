use std::sync::Arc;

use crate::application::ports::{NotesModel, NotesModelError};

const NOTES_PROMPT_TEMPLATE: &str = r#"
You are given the raw transcription of an audio conversation, lecture, or meeting. Your task is to convert this unstructured text into clean, organized, and easy-to-read structured notes.

Guidelines:
1. Summarize key points clearly and concisely.
2. Group related information under relevant headings or bullet points.
3. Maintain the original meaning and tone of the transcription.
4. If the content contains action items, decisions, or follow-ups, highlight them clearly.
5. Do not include filler words, disfluencies (e.g., "um", "you know"), or irrelevant tangents.

Output Format:
* Use headings, subheadings, and bullet points.
* Ensure it's skimmable and usable for reference.

Input:
"{transcript}"

Output:
{Structured notes}
"#;

/// Builds the fixed notes-generation prompt with the transcript embedded
/// verbatim. An empty transcript is valid input.
pub fn build_notes_prompt(transcript: &str) -> String {
    NOTES_PROMPT_TEMPLATE.replace("{transcript}", transcript)
}

/// Turns a rendered transcript into structured notes through the notes
/// model. Unlike per-chunk transcription, a failure here is not recoverable:
/// it is wrapped with context and propagated to the caller.
pub struct NotesService<M>
where
    M: NotesModel,
{
    model: Arc<M>,
}

impl<M> NotesService<M>
where
    M: NotesModel,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    #[tracing::instrument(skip(self, transcript), fields(transcript_chars = transcript.len()))]
    pub async fn summarize(&self, transcript: &str) -> Result<String, NotesError> {
        let prompt = build_notes_prompt(transcript);

        let notes = self
            .model
            .generate(&prompt)
            .await
            .map_err(NotesError::GenerationFailed)?;

        tracing::info!(notes_chars = notes.len(), "Structured notes generated");

        Ok(notes)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("failed to generate structured notes: {0}")]
    GenerationFailed(#[from] NotesModelError),
}
