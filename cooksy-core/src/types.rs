use serde::{Deserialize, Serialize};

/// Categories offered on the discovery pages.
///
/// Freshly submitted recipes are filed under [`DEFAULT_CATEGORY`] instead,
/// so a recipe's category is not guaranteed to appear in this list.
pub const CATEGORIES: [&str; 5] = ["Desayuno", "Almuerzo", "Cena", "Postre", "Snack"];

/// Category assigned to recipes created through the submission workflow.
pub const DEFAULT_CATEGORY: &str = "General";

/// Difficulty level of a recipe.
///
/// The stored data carries two spellings for the middle level: submission
/// labels it "Media" while the discovery filter labels it "Intermedio".
/// Both parse to [`Difficulty::Media`] so the two vocabularies compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Facil,
    Media,
    Dificil,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Facil, Difficulty::Media, Difficulty::Dificil];

    /// Parse a stored difficulty label, case-insensitively.
    ///
    /// Returns `None` for labels outside the known vocabulary.
    pub fn parse(label: &str) -> Option<Difficulty> {
        match label.trim().to_lowercase().as_str() {
            "fácil" => Some(Difficulty::Facil),
            "media" | "intermedio" => Some(Difficulty::Media),
            "difícil" => Some(Difficulty::Dificil),
            _ => None,
        }
    }

    /// Label used by the submission form.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Facil => "Fácil",
            Difficulty::Media => "Media",
            Difficulty::Dificil => "Difícil",
        }
    }

    /// Label used by the discovery filter dropdown.
    pub fn filter_label(&self) -> &'static str {
        match self {
            Difficulty::Facil => "Fácil",
            Difficulty::Media => "Intermedio",
            Difficulty::Dificil => "Difícil",
        }
    }
}

/// A recipe as served by the backend.
///
/// Fields beyond `id` and `title` are optional in practice: older rows are
/// sparse, so everything else defaults rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Backend-assigned identifier. Document-store backends emit `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Average rating, 0.0 for unrated recipes.
    #[serde(default)]
    pub rating: f32,
}

impl Recipe {
    /// Total time in minutes, treating missing components as zero.
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// Body of a recipe creation request.
///
/// Every field is serialized even when empty; the backend expects the full
/// shape on every submission.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipePayload {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub category: String,
    /// Data URI of the staged image, or empty when none was staged.
    pub image_url: String,
    pub rating: f32,
}

/// In-progress form state for the submission workflow.
///
/// Numeric fields stay as free text until validation parses them, so the
/// draft can hold whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    /// Staged image as a base64 data URI, if one was selected.
    pub image_data_uri: Option<String>,
}

impl DraftRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient line, trimming whitespace. Blank entries are dropped.
    ///
    /// Returns whether the entry was added.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        push_trimmed(&mut self.ingredients, raw)
    }

    /// Remove the ingredient at `index`. Out-of-range indexes are ignored.
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Add an instruction step, trimming whitespace. Blank entries are dropped.
    ///
    /// Returns whether the entry was added.
    pub fn add_instruction(&mut self, raw: &str) -> bool {
        push_trimmed(&mut self.instructions, raw)
    }

    /// Remove the instruction at `index`. Out-of-range indexes are ignored.
    pub fn remove_instruction(&mut self, index: usize) {
        if index < self.instructions.len() {
            self.instructions.remove(index);
        }
    }
}

fn push_trimmed(entries: &mut Vec<String>, raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    entries.push(trimmed.to_string());
    true
}
