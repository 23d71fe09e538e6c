pub mod client;
pub mod config;
pub mod provider;
pub mod types;

pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;
pub use provider::{CompletionError, CompletionProvider, CompletionResult};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Choice, FinishReason, MessageRole, ModelInfo, Usage,
};

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::provider::*;
    pub use crate::types::*;
}
