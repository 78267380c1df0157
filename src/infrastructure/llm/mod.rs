mod workers_ai_text_model;

pub use workers_ai_text_model::WorkersAiTextModel;
