pub mod client;
pub mod relay;

pub use client::{ModelConfig, OpenRouterClient, DEFAULT_MODEL};
pub use relay::{ChatRelay, EMPTY_REPLY, FAILURE_REPLY, MISSING_KEY_REPLY};
