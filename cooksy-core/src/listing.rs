//! Collection-level helpers for the discovery pages.

use crate::backend::RecipeBackend;
use crate::types::{Recipe, CATEGORIES};

/// Number of recipes featured on the home page.
pub const FEATURED_COUNT: usize = 4;

/// Fetch the collection, degrading to an empty list on failure.
///
/// The discovery pages render an empty state rather than an error page, so
/// fetch failures are logged and swallowed here. Submission errors are never
/// handled this way.
pub async fn fetch_recipes_or_empty(backend: &dyn RecipeBackend) -> Vec<Recipe> {
    match backend.fetch_recipes().await {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!(error = %e, "recipe fetch failed, showing empty collection");
            Vec::new()
        }
    }
}

/// The home page's featured strip: the first recipes in collection order.
pub fn featured(recipes: &[Recipe]) -> &[Recipe] {
    &recipes[..recipes.len().min(FEATURED_COUNT)]
}

/// Per-category recipe counts for the home page tiles, in display order.
///
/// Counting matches the category filter: case-insensitive equality. Recipes
/// filed outside the known categories (for example freshly submitted ones
/// under "General") are not counted anywhere.
pub fn category_counts(recipes: &[Recipe]) -> Vec<(&'static str, usize)> {
    CATEGORIES
        .iter()
        .map(|&name| {
            let count = recipes
                .iter()
                .filter(|recipe| {
                    recipe
                        .category
                        .as_deref()
                        .is_some_and(|category| category.to_lowercase() == name.to_lowercase())
                })
                .count();
            (name, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;

    fn recipe(id: &str, category: Option<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Receta {}", id),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            category: category.map(|c| c.to_string()),
            difficulty: None,
            prep_time: 0,
            cook_time: 0,
            servings: 0,
            image_url: None,
            rating: 0.0,
        }
    }

    #[tokio::test]
    async fn test_fetch_or_empty_passes_collection_through() {
        let backend = MockBackend::new().with_recipes(vec![recipe("1", None)]);
        let recipes = fetch_recipes_or_empty(&backend).await;
        assert_eq!(recipes.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_or_empty_swallows_failures() {
        let backend = MockBackend::new().with_fetch_status(500);
        let recipes = fetch_recipes_or_empty(&backend).await;
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_featured_takes_first_four() {
        let recipes: Vec<Recipe> = (0..6).map(|i| recipe(&i.to_string(), None)).collect();
        let strip = featured(&recipes);
        assert_eq!(strip.len(), 4);
        assert_eq!(strip[0].id, "0");
        assert_eq!(strip[3].id, "3");
    }

    #[test]
    fn test_featured_handles_short_collections() {
        let recipes = vec![recipe("1", None)];
        assert_eq!(featured(&recipes).len(), 1);
        assert!(featured(&[]).is_empty());
    }

    #[test]
    fn test_category_counts_in_display_order() {
        let recipes = vec![
            recipe("1", Some("Postre")),
            recipe("2", Some("postre")),
            recipe("3", Some("Cena")),
            recipe("4", Some("General")),
            recipe("5", None),
        ];
        let counts = category_counts(&recipes);
        assert_eq!(
            counts,
            vec![
                ("Desayuno", 0),
                ("Almuerzo", 0),
                ("Cena", 1),
                ("Postre", 2),
                ("Snack", 0),
            ]
        );
    }
}
