mod health;
mod notes;

pub use health::health_handler;
pub use notes::{method_not_allowed_handler, notes_handler};
