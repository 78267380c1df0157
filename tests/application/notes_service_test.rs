use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use narvik::application::ports::{NotesModel, NotesModelError};
use narvik::application::services::{NotesError, NotesService, build_notes_prompt};

struct CapturingModel {
    prompts: Mutex<Vec<String>>,
}

impl CapturingModel {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NotesModel for CapturingModel {
    async fn generate(&self, prompt: &str) -> Result<String, NotesModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("## Mock notes".to_string())
    }
}

struct FailingModel;

#[async_trait]
impl NotesModel for FailingModel {
    async fn generate(&self, _prompt: &str) -> Result<String, NotesModelError> {
        Err(NotesModelError::ApiRequestFailed("upstream down".to_string()))
    }
}

#[test]
fn given_transcript_when_building_prompt_then_embeds_text_verbatim() {
    let prompt = build_notes_prompt("alpha beta gamma");

    assert!(prompt.contains("\"alpha beta gamma\""));
    assert!(prompt.contains("structured notes"));
    assert!(prompt.contains("action items"));
}

#[test]
fn given_empty_transcript_when_building_prompt_then_keeps_template_intact() {
    let prompt = build_notes_prompt("");

    assert!(prompt.contains("Input:\n\"\""));
    assert!(!prompt.contains("{transcript}"));
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_passes_full_prompt_to_model() {
    let model = Arc::new(CapturingModel::new());
    let service = NotesService::new(Arc::clone(&model));

    let notes = service.summarize("meeting about the roadmap").await.unwrap();

    assert_eq!(notes, "## Mock notes");
    let prompts = model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("meeting about the roadmap"));
}

#[tokio::test]
async fn given_empty_transcript_when_summarizing_then_model_is_still_invoked() {
    let model = Arc::new(CapturingModel::new());
    let service = NotesService::new(Arc::clone(&model));

    let result = service.summarize("").await;

    assert!(result.is_ok());
    assert_eq!(model.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_model_failure_when_summarizing_then_error_is_wrapped_with_context() {
    let service = NotesService::new(Arc::new(FailingModel));

    let error = service.summarize("anything").await.unwrap_err();

    assert!(matches!(error, NotesError::GenerationFailed(_)));
    let message = error.to_string();
    assert!(message.starts_with("failed to generate structured notes"));
    assert!(message.contains("upstream down"));
}
