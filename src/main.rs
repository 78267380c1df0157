use std::env;
use std::sync::Arc;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use narvik::application::services::{NotesService, TranscriptionService};
use narvik::infrastructure::audio::{HttpAudioSource, WorkersAiWhisperEngine};
use narvik::infrastructure::llm::WorkersAiTextModel;
use narvik::infrastructure::observability::{TracingConfig, init_tracing};
use narvik::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let audio_source = Arc::new(HttpAudioSource::new());
    let whisper_engine = Arc::new(WorkersAiWhisperEngine::new(
        &settings.workers_ai.base_url,
        &settings.workers_ai.account_id,
        &settings.workers_ai.api_token,
        &settings.transcription.model,
    ));
    let text_model = Arc::new(WorkersAiTextModel::new(
        &settings.workers_ai.base_url,
        &settings.workers_ai.account_id,
        &settings.workers_ai.api_token,
        &settings.notes.model,
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        whisper_engine,
        settings.transcription.chunk_size_bytes,
    ));
    let notes_service = Arc::new(NotesService::new(text_model));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let response_variant = settings.server.response_variant;

    let state = AppState {
        audio_source,
        transcription_service,
        notes_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!(response_variant = ?response_variant, "Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
