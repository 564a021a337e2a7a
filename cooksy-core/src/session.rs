//! Session state shared between pages: the auth token and the recipe
//! handed off from the listing to the detail page.

use crate::error::StoreError;
use crate::store::KeyValueStore;
use crate::types::Recipe;

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Store key holding the recipe selected for the detail page.
pub const SELECTED_RECIPE_KEY: &str = "selectedRecipe";

/// The current auth token, if one is saved.
///
/// An empty token counts as absent; the token is never decoded or verified
/// here, presence is all the client checks.
pub fn current_token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn save_token(store: &dyn KeyValueStore, token: &str) -> Result<(), StoreError> {
    store.set(TOKEN_KEY, token)
}

pub fn clear_token(store: &dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(TOKEN_KEY)
}

/// Stash a recipe for the detail page to pick up.
///
/// The full recipe is serialized into the store, so the detail page renders
/// without refetching.
pub fn select_recipe(store: &dyn KeyValueStore, recipe: &Recipe) -> Result<(), StoreError> {
    store.set(SELECTED_RECIPE_KEY, &serde_json::to_string(recipe)?)
}

/// The recipe stashed by [`select_recipe`], or `None` when nothing is
/// selected or the stored value no longer parses.
pub fn selected_recipe(store: &dyn KeyValueStore) -> Option<Recipe> {
    let raw = store.get(SELECTED_RECIPE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            tracing::warn!(error = %e, "stored recipe selection does not parse, ignoring");
            None
        }
    }
}

pub fn clear_selected_recipe(store: &dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(SELECTED_RECIPE_KEY)
}
