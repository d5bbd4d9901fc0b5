pub mod ai;
pub mod ai_worker;
pub mod dataset;
pub mod grid;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod trends;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use ai::{ChatRelay, ModelConfig, OpenRouterClient, DEFAULT_MODEL};
pub use ai_worker::spawn_chat_worker;
pub use dataset::{all as all_elements, by_z, filter_elements};
pub use grid::{layout as grid_layout, GridLayout, FLOW_THRESHOLD};
pub use models::{AppState, Category, ChatState, Element, QuizPhase, ViewMode};
pub use quiz::{generate_questions, QuizRun, QUESTIONS_PER_RUN};
pub use trends::{project, stats, TrendProperty};
pub use utils::calculate_wrapped_cursor_position;
