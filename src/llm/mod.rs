//! Text completion against a hosted language model

mod client;
mod error;

pub use client::{OpenRouterClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use error::LlmError;

use async_trait::async_trait;

/// Anything that turns a prompt into raw completion text
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
