pub mod assistant;
pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod listing;
pub mod session;
pub mod store;
pub mod submit;
pub mod types;

pub use assistant::{ask, create_assistant, Assistant, AssistantError, FakeAssistant, HttpAssistant};
pub use backend::{HttpBackend, MockBackend, RecipeBackend};
pub use config::Config;
pub use error::{FetchError, StoreError, SubmitError};
pub use filter::{
    filter_recipes, FilterState, ListingSummary, CATEGORY_PLACEHOLDER, DIFFICULTY_PLACEHOLDER,
};
pub use crate::image::{read_as_data_uri, validate_image, ImageError, ImageStaging, StagedImage};
pub use listing::{category_counts, featured, fetch_recipes_or_empty, FEATURED_COUNT};
pub use session::{
    clear_selected_recipe, clear_token, current_token, save_token, select_recipe, selected_recipe,
};
pub use store::{DiskStore, KeyValueStore, MemoryStore};
pub use submit::{build_payload, RecipeSubmitter};
pub use types::{
    CreateRecipePayload, Difficulty, DraftRecipe, Recipe, CATEGORIES, DEFAULT_CATEGORY,
};
