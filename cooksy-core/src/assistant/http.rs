//! HTTP recipe assistant.

use super::{Assistant, AssistantError};
use async_trait::async_trait;
use serde::Serialize;

use crate::types::Recipe;

/// Assistant backed by the suggestion endpoint.
#[derive(Debug)]
pub struct HttpAssistant {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl HttpAssistant {
    /// Create a new HttpAssistant posting to the given endpoint.
    pub fn new(url: String, model: String) -> Self {
        Self {
            url,
            model,
            client: reqwest::Client::new(),
        }
    }
}

/// Suggestion request format.
#[derive(Debug, Serialize)]
struct SuggestRequest<'a> {
    question: &'a str,
    model: &'a str,
}

#[async_trait]
impl Assistant for HttpAssistant {
    async fn suggest(&self, question: &str) -> Result<Vec<Recipe>, AssistantError> {
        let request = SuggestRequest {
            question,
            model: &self.model,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(AssistantError::ApiError {
                status,
                message: body,
            });
        }

        // The endpoint answers with a bare JSON array of recipes.
        serde_json::from_str(&body).map_err(|e| AssistantError::ParseError(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
