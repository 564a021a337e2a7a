//! Fake recipe assistant for testing.
//!
//! Suggestions are matched by checking whether the question contains a
//! registered substring, so chat flows run without network access.

use super::{Assistant, AssistantError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use crate::types::Recipe;

/// A fake assistant for testing.
///
/// If no registered substring matches, returns the default suggestions or
/// an error. Every question that reaches the transport is recorded.
#[derive(Debug)]
pub struct FakeAssistant {
    /// Map of question substring -> suggested recipes
    responses: RwLock<HashMap<String, Vec<Recipe>>>,
    /// Default suggestions if no match found
    default_response: Option<Vec<Recipe>>,
    /// Questions received, in call order
    questions: Mutex<Vec<String>>,
}

impl FakeAssistant {
    /// Create a new FakeAssistant with no registered suggestions.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Create a FakeAssistant that suggests `recipes` for questions
    /// containing a substring.
    pub fn with_response(question_contains: &str, recipes: Vec<Recipe>) -> Self {
        let mut assistant = Self::new();
        assistant.add_response(question_contains, recipes);
        assistant
    }

    /// Add suggestions for questions containing a specific substring.
    pub fn add_response(&mut self, question_contains: &str, recipes: Vec<Recipe>) {
        self.responses
            .write()
            .unwrap()
            .insert(question_contains.to_string(), recipes);
    }

    /// Set the default suggestions when no pattern matches.
    pub fn with_default_response(mut self, recipes: Vec<Recipe>) -> Self {
        self.default_response = Some(recipes);
        self
    }

    /// Create a FakeAssistant with a small built-in cookbook, handy for
    /// offline demos.
    pub fn with_sample_recipes() -> Self {
        let mut assistant = Self::new();
        assistant.add_response(
            "arroz",
            vec![sample(
                "fake-1",
                "Arroz a la cubana",
                &["Arroz", "Huevos", "Tomate frito"],
            )],
        );
        assistant.add_response(
            "huevo",
            vec![
                sample("fake-2", "Huevos rotos", &["Huevos", "Patatas"]),
                sample("fake-3", "Revuelto de setas", &["Huevos", "Setas"]),
            ],
        );
        assistant.with_default_response(vec![sample(
            "fake-4",
            "Ensalada mixta",
            &["Lechuga", "Tomate", "Atún"],
        )])
    }

    /// Questions received so far.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Default for FakeAssistant {
    fn default() -> Self {
        Self::new()
    }
}

fn sample(id: &str, title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: Vec::new(),
        category: Some("General".to_string()),
        difficulty: Some("Fácil".to_string()),
        prep_time: 10,
        cook_time: 10,
        servings: 2,
        image_url: None,
        rating: 0.0,
    }
}

#[async_trait]
impl Assistant for FakeAssistant {
    async fn suggest(&self, question: &str) -> Result<Vec<Recipe>, AssistantError> {
        self.questions.lock().unwrap().push(question.to_string());

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let question_lower = question.to_lowercase();
        for (pattern, recipes) in responses.iter() {
            if question_lower.contains(&pattern.to_lowercase()) {
                return Ok(recipes.clone());
            }
        }

        match &self.default_response {
            Some(recipes) => Ok(recipes.clone()),
            None => {
                // Truncate by characters; a byte cut could split a multibyte char.
                let preview: String = question.chars().take(100).collect();
                Err(AssistantError::RequestFailed(format!(
                    "FakeAssistant: no suggestions configured for question: {}",
                    preview
                )))
            }
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
