//! The recipe submission workflow.
//!
//! Validation runs entirely client-side before anything touches the
//! network: auth gate first, then required fields in form order, then
//! numeric parsing. The first failure wins and is reported alone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::backend::RecipeBackend;
use crate::error::SubmitError;
use crate::session;
use crate::store::KeyValueStore;
use crate::types::{CreateRecipePayload, DraftRecipe, Recipe, DEFAULT_CATEGORY};

/// Validate a draft and assemble the creation payload.
///
/// Checks run in form order: title, description, ingredients, instructions,
/// prep time, cook time, servings, difficulty, then the three numeric
/// parses. Text fields and every list entry are trimmed into the payload.
pub fn build_payload(draft: &DraftRecipe) -> Result<CreateRecipePayload, SubmitError> {
    validate_required(draft)?;

    let prep_time = parse_minutes(&draft.prep_time, "prepTime")?;
    let cook_time = parse_minutes(&draft.cook_time, "cookTime")?;
    let servings = parse_minutes(&draft.servings, "servings")?;

    Ok(CreateRecipePayload {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        ingredients: trim_entries(&draft.ingredients),
        instructions: trim_entries(&draft.instructions),
        prep_time,
        cook_time,
        servings,
        difficulty: draft.difficulty.clone(),
        category: DEFAULT_CATEGORY.to_string(),
        image_url: draft.image_data_uri.clone().unwrap_or_default(),
        rating: 0.0,
    })
}

fn validate_required(draft: &DraftRecipe) -> Result<(), SubmitError> {
    if draft.title.trim().is_empty() {
        return Err(SubmitError::Validation("title"));
    }
    if draft.description.trim().is_empty() {
        return Err(SubmitError::Validation("description"));
    }
    if draft.ingredients.is_empty() {
        return Err(SubmitError::Validation("ingredients"));
    }
    if draft.instructions.is_empty() {
        return Err(SubmitError::Validation("instructions"));
    }
    if draft.prep_time.is_empty() {
        return Err(SubmitError::Validation("prepTime"));
    }
    if draft.cook_time.is_empty() {
        return Err(SubmitError::Validation("cookTime"));
    }
    if draft.servings.is_empty() {
        return Err(SubmitError::Validation("servings"));
    }
    if draft.difficulty.is_empty() {
        return Err(SubmitError::Validation("difficulty"));
    }
    Ok(())
}

/// Parse a free-text numeric field as whole minutes (or servings).
///
/// Whitespace around the digits is fine; anything else, including signs and
/// fractions, is rejected.
fn parse_minutes(raw: &str, field: &'static str) -> Result<u32, SubmitError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| SubmitError::InvalidNumber { field })
}

fn trim_entries(entries: &[String]) -> Vec<String> {
    entries.iter().map(|entry| entry.trim().to_string()).collect()
}

/// Runs the submission workflow against an injected backend and store.
///
/// At most one submission runs at a time; a second call while the first is
/// still in flight fails with [`SubmitError::AlreadyInFlight`] without
/// touching the draft or the backend.
pub struct RecipeSubmitter {
    backend: Arc<dyn RecipeBackend>,
    store: Arc<dyn KeyValueStore>,
    in_flight: AtomicBool,
    on_uploaded: Option<Box<dyn Fn(&Recipe) + Send + Sync>>,
}

impl RecipeSubmitter {
    pub fn new(backend: Arc<dyn RecipeBackend>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            store,
            in_flight: AtomicBool::new(false),
            on_uploaded: None,
        }
    }

    /// Register a callback invoked exactly once per successful submission,
    /// after the backend confirms the recipe.
    pub fn on_uploaded<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Recipe) + Send + Sync + 'static,
    {
        self.on_uploaded = Some(Box::new(callback));
        self
    }

    /// Whether a submission is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit a draft: auth gate, validation, then one POST to the backend.
    pub async fn submit(&self, draft: &DraftRecipe) -> Result<Recipe, SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::AlreadyInFlight);
        }
        let result = self.run(draft).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run(&self, draft: &DraftRecipe) -> Result<Recipe, SubmitError> {
        let token =
            session::current_token(self.store.as_ref()).ok_or(SubmitError::Unauthenticated)?;

        let payload = build_payload(draft)?;

        let recipe = self.backend.create_recipe(&payload, &token).await?;
        tracing::info!(id = %recipe.id, title = %recipe.title, "recipe created");

        if let Some(callback) = &self.on_uploaded {
            callback(&recipe);
        }
        Ok(recipe)
    }
}
