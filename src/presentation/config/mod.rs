mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, LoggingSettings, NotesSettings, ResponseVariant, ServerSettings, Settings,
    TranscriptionSettings, WorkersAiSettings,
};
