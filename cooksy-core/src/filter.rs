//! Client-side filtering for the recipe discovery page.
//!
//! The whole collection is fetched once and narrowed locally; there is no
//! server-side search. Filters compose with AND logic and never reorder the
//! collection.

use std::fmt;

use url::Url;

use crate::types::{Difficulty, Recipe};

/// Dropdown sentinel meaning "no category selected".
pub const CATEGORY_PLACEHOLDER: &str = "Filtrar por categoría";

/// Dropdown sentinel meaning "no difficulty selected".
pub const DIFFICULTY_PLACEHOLDER: &str = "Filtrar por dificultad";

/// Current filter selection on the discovery page.
///
/// Dropdown fields hold either a concrete label or their placeholder
/// sentinel; the sentinels (and empty strings) mean the filter is inactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search over title, ingredients and description. The term is
    /// matched as typed; only the empty term is inactive.
    pub search_term: String,
    /// Selected category label, or [`CATEGORY_PLACEHOLDER`].
    pub category: String,
    /// Selected difficulty label, or [`DIFFICULTY_PLACEHOLDER`].
    pub difficulty: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            search_term: String::new(),
            category: CATEGORY_PLACEHOLDER.to_string(),
            difficulty: DIFFICULTY_PLACEHOLDER.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the filter state from a page URL, reading the `category` and
    /// `search` query parameters.
    ///
    /// Only non-empty parameters take effect; anything else leaves the
    /// default in place. Unparseable URLs yield the default state. This is
    /// meant to run once when the page mounts; later URL changes do not
    /// re-seed an already-edited state.
    pub fn from_url(url: &str) -> Self {
        let mut state = FilterState::new();
        let Some(parsed) = parse_page_url(url) else {
            tracing::debug!(url, "could not parse page URL, using default filters");
            return state;
        };
        if let Some(category) = query_param(&parsed, "category") {
            state.category = category;
        }
        if let Some(search) = query_param(&parsed, "search") {
            state.search_term = search;
        }
        state
    }

    /// Whether any filter would currently narrow the collection.
    pub fn is_active(&self) -> bool {
        self.search_active() || self.category_active() || self.difficulty_active()
    }

    fn search_active(&self) -> bool {
        !self.search_term.is_empty()
    }

    fn category_active(&self) -> bool {
        !self.category.is_empty() && self.category != CATEGORY_PLACEHOLDER
    }

    fn difficulty_active(&self) -> bool {
        !self.difficulty.is_empty() && self.difficulty != DIFFICULTY_PLACEHOLDER
    }
}

fn parse_page_url(url: &str) -> Option<Url> {
    // Pages hand us absolute URLs; bare paths like "/recipes?search=x" are
    // accepted too by anchoring them on a placeholder origin.
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/").ok()?;
            base.join(url).ok()
        }
        Err(_) => None,
    }
}

/// First occurrence of a query parameter, skipping empty values.
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Narrow `recipes` to those matching every active filter.
///
/// Stages run in a fixed order (search, then category, then difficulty) and
/// the original collection order is preserved. With no active filters the
/// full collection comes back unchanged.
pub fn filter_recipes(recipes: &[Recipe], state: &FilterState) -> Vec<Recipe> {
    let needle = state.search_term.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| !state.search_active() || matches_search(recipe, &needle))
        .filter(|recipe| !state.category_active() || matches_category(recipe, &state.category))
        .filter(|recipe| !state.difficulty_active() || matches_difficulty(recipe, &state.difficulty))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on title, any ingredient, or description.
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    if recipe.title.to_lowercase().contains(needle) {
        return true;
    }
    if recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.to_lowercase().contains(needle))
    {
        return true;
    }
    recipe
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Case-insensitive category equality. Recipes without a category never match.
fn matches_category(recipe: &Recipe, selected: &str) -> bool {
    recipe
        .category
        .as_deref()
        .is_some_and(|category| category.to_lowercase() == selected.to_lowercase())
}

/// Difficulty equality. Both sides go through [`Difficulty::parse`] first so
/// the two middle-level spellings ("Media" and "Intermedio") match each
/// other; labels outside the known vocabulary fall back to case-insensitive
/// string equality. Recipes without a difficulty never match.
fn matches_difficulty(recipe: &Recipe, selected: &str) -> bool {
    let Some(label) = recipe.difficulty.as_deref() else {
        return false;
    };
    match (Difficulty::parse(label), Difficulty::parse(selected)) {
        (Some(have), Some(want)) => have == want,
        _ => label.to_lowercase() == selected.trim().to_lowercase(),
    }
}

/// Result-count line shown above the filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    /// Recipes surviving the filters.
    pub shown: usize,
    /// Size of the whole collection.
    pub total: usize,
    /// Search term, when the search filter is active.
    pub search_term: Option<String>,
}

impl ListingSummary {
    pub fn new(state: &FilterState, shown: usize, total: usize) -> Self {
        ListingSummary {
            shown,
            total,
            search_term: state.search_active().then(|| state.search_term.clone()),
        }
    }
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.search_term {
            Some(term) => write!(
                f,
                "Mostrando {} de {} recetas para \"{}\"",
                self.shown, self.total, term
            ),
            None => write!(f, "Mostrando {} de {} recetas", self.shown, self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, category: &str, difficulty: &str) -> Recipe {
        Recipe {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            category: Some(category.to_string()),
            difficulty: Some(difficulty.to_string()),
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            image_url: None,
            rating: 0.0,
        }
    }

    fn sample_collection() -> Vec<Recipe> {
        let mut tortilla = recipe("Tortilla de patatas", "Almuerzo", "Media");
        tortilla.ingredients = vec!["Patatas".to_string(), "Huevos".to_string()];
        tortilla.description = Some("Clásico español".to_string());

        let mut flan = recipe("Flan casero", "Postre", "Fácil");
        flan.ingredients = vec!["Huevos".to_string(), "Leche".to_string()];

        let mut cocido = recipe("Cocido madrileño", "Cena", "Difícil");
        cocido.ingredients = vec!["Garbanzos".to_string()];
        cocido.description = Some("Plato de cuchara".to_string());

        vec![tortilla, flan, cocido]
    }

    #[test]
    fn test_no_active_filters_returns_everything() {
        let recipes = sample_collection();
        let filtered = filter_recipes(&recipes, &FilterState::new());
        assert_eq!(filtered, recipes);
    }

    #[test]
    fn test_placeholders_are_inactive() {
        let state = FilterState {
            search_term: String::new(),
            category: CATEGORY_PLACEHOLDER.to_string(),
            difficulty: DIFFICULTY_PLACEHOLDER.to_string(),
        };
        assert!(!state.is_active());
    }

    #[test]
    fn test_search_matches_title() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "tortilla".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tortilla de patatas");
    }

    #[test]
    fn test_search_matches_any_ingredient() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "huevos".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_search_matches_description() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "cuchara".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Cocido madrileño");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "FLAN".to_string(),
            ..FilterState::new()
        };
        assert_eq!(filter_recipes(&recipes, &state).len(), 1);
    }

    #[test]
    fn test_search_whitespace_is_significant() {
        let recipes = sample_collection();
        // No title, ingredient or description contains the padded term.
        let state = FilterState {
            search_term: "  flan  ".to_string(),
            ..FilterState::new()
        };
        assert!(filter_recipes(&recipes, &state).is_empty());

        // Inner whitespace matches like any other character.
        let state = FilterState {
            search_term: "de patatas".to_string(),
            ..FilterState::new()
        };
        assert_eq!(filter_recipes(&recipes, &state).len(), 1);
    }

    #[test]
    fn test_space_only_term_is_active() {
        let mut pan = recipe("Pan", "Desayuno", "Fácil");
        pan.ingredients = vec!["Harina".to_string()];
        let tortilla = recipe("Tortilla de patatas", "Almuerzo", "Media");

        let state = FilterState {
            search_term: " ".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&[pan, tortilla], &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tortilla de patatas");
    }

    #[test]
    fn test_category_filter_is_exact_not_substring() {
        let recipes = sample_collection();
        let state = FilterState {
            category: "Post".to_string(),
            ..FilterState::new()
        };
        assert!(filter_recipes(&recipes, &state).is_empty());

        let state = FilterState {
            category: "postre".to_string(),
            ..FilterState::new()
        };
        assert_eq!(filter_recipes(&recipes, &state).len(), 1);
    }

    #[test]
    fn test_recipe_without_category_never_matches() {
        let mut uncategorized = recipe("Pan", "x", "Fácil");
        uncategorized.category = None;
        let state = FilterState {
            category: "Cena".to_string(),
            ..FilterState::new()
        };
        assert!(filter_recipes(&[uncategorized], &state).is_empty());
    }

    #[test]
    fn test_difficulty_middle_labels_match_each_other() {
        let recipes = sample_collection();
        // Stored as "Media", selected through the dropdown as "Intermedio".
        let state = FilterState {
            difficulty: "Intermedio".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tortilla de patatas");
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_string_equality() {
        let odd = recipe("Paella", "Almuerzo", "Experto");
        let state = FilterState {
            difficulty: "experto".to_string(),
            ..FilterState::new()
        };
        assert_eq!(filter_recipes(&[odd.clone()], &state).len(), 1);

        let state = FilterState {
            difficulty: "Media".to_string(),
            ..FilterState::new()
        };
        assert!(filter_recipes(&[odd], &state).is_empty());
    }

    #[test]
    fn test_filters_compose_with_and_logic() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "huevos".to_string(),
            category: "Postre".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Flan casero");
    }

    #[test]
    fn test_combined_filter_equals_intersection_of_single_filters() {
        let recipes = sample_collection();
        let combined = FilterState {
            search_term: "huevos".to_string(),
            category: "Postre".to_string(),
            difficulty: "Fácil".to_string(),
        };

        let by_search = filter_recipes(
            &recipes,
            &FilterState {
                search_term: "huevos".to_string(),
                ..FilterState::new()
            },
        );
        let by_category = filter_recipes(
            &recipes,
            &FilterState {
                category: "Postre".to_string(),
                ..FilterState::new()
            },
        );
        let by_difficulty = filter_recipes(
            &recipes,
            &FilterState {
                difficulty: "Fácil".to_string(),
                ..FilterState::new()
            },
        );

        let in_all: Vec<&str> = recipes
            .iter()
            .filter(|r| {
                [&by_search, &by_category, &by_difficulty]
                    .iter()
                    .all(|subset| subset.iter().any(|s| s.id == r.id))
            })
            .map(|r| r.id.as_str())
            .collect();

        let filtered = filter_recipes(&recipes, &combined);
        let combined_ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(combined_ids, in_all);
    }

    #[test]
    fn test_search_scenario_two_recipes() {
        let mut pasta = recipe("Pasta", "Cena", "Media");
        pasta.ingredients = vec!["tomato".to_string(), "basil".to_string()];
        let mut cake = recipe("Cake", "Postre", "Media");
        cake.ingredients = vec!["flour".to_string()];

        let state = FilterState {
            search_term: "tom".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&[pasta, cake], &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Pasta");
    }

    #[test]
    fn test_filtering_preserves_collection_order() {
        let recipes = sample_collection();
        let state = FilterState {
            search_term: "o".to_string(),
            ..FilterState::new()
        };
        let filtered = filter_recipes(&recipes, &state);
        let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Tortilla de patatas", "Flan casero", "Cocido madrileño"]
        );
    }

    #[test]
    fn test_from_url_reads_category_and_search() {
        let state = FilterState::from_url("http://localhost:3000/recipes?category=Postre&search=flan");
        assert_eq!(state.category, "Postre");
        assert_eq!(state.search_term, "flan");
        assert_eq!(state.difficulty, DIFFICULTY_PLACEHOLDER);
    }

    #[test]
    fn test_from_url_accepts_bare_paths() {
        let state = FilterState::from_url("/recipes?search=tortilla");
        assert_eq!(state.search_term, "tortilla");
    }

    #[test]
    fn test_from_url_ignores_empty_parameters() {
        let state = FilterState::from_url("http://localhost:3000/recipes?category=&search=");
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_from_url_takes_first_occurrence() {
        let state = FilterState::from_url("/recipes?category=Cena&category=Postre");
        assert_eq!(state.category, "Cena");
    }

    #[test]
    fn test_from_url_garbage_yields_default() {
        assert_eq!(FilterState::from_url("http://["), FilterState::new());
    }

    #[test]
    fn test_summary_display_with_and_without_search() {
        let state = FilterState {
            search_term: "flan".to_string(),
            ..FilterState::new()
        };
        let summary = ListingSummary::new(&state, 1, 3);
        assert_eq!(
            summary.to_string(),
            "Mostrando 1 de 3 recetas para \"flan\""
        );

        let summary = ListingSummary::new(&FilterState::new(), 3, 3);
        assert_eq!(summary.to_string(), "Mostrando 3 de 3 recetas");
    }
}
