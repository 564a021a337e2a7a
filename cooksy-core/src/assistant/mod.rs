//! Recipe assistant abstraction.
//!
//! The assistant answers free-text questions ("qué cocino con tomate y
//! arroz") with recipe suggestions. A trait keeps the transport swappable
//! so the chat flow can be tested without network access.

mod fake;
mod http;

pub use fake::FakeAssistant;
pub use http::HttpAssistant;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::Config;
use crate::types::Recipe;

/// Error type for assistant operations.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Trait for recipe assistants.
///
/// Implementations are transports only; question hygiene lives in [`ask`].
#[async_trait]
pub trait Assistant: Send + Sync + fmt::Debug {
    /// Answer a question with a list of suggested recipes.
    async fn suggest(&self, question: &str) -> Result<Vec<Recipe>, AssistantError>;

    /// Get the assistant name (e.g. "http", "fake").
    fn name(&self) -> &'static str;
}

/// Send a question to the assistant.
///
/// The question is trimmed first; blank questions are rejected locally and
/// never reach the transport.
pub async fn ask(
    assistant: &dyn Assistant,
    question: &str,
) -> Result<Vec<Recipe>, AssistantError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AssistantError::EmptyQuestion);
    }

    tracing::debug!(assistant = assistant.name(), "asking for suggestions");
    let recipes = assistant.suggest(question).await?;
    tracing::debug!(count = recipes.len(), "assistant answered");
    Ok(recipes)
}

/// Build the assistant selected by the configuration.
pub fn create_assistant(config: &Config) -> Box<dyn Assistant> {
    match config.assistant_mode.as_str() {
        "fake" => Box::new(FakeAssistant::with_sample_recipes()),
        _ => Box::new(HttpAssistant::new(
            config.assistant_url.clone(),
            config.assistant_model.clone(),
        )),
    }
}
