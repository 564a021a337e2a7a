use anyhow::{bail, Result};
use cooksy_core::{
    fetch_recipes_or_empty, filter_recipes, select_recipe, selected_recipe, FilterState,
    KeyValueStore, ListingSummary, Recipe, RecipeBackend,
};

/// Filter flags for the listing command.
pub struct ListFilters {
    pub url: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl ListFilters {
    /// Build the filter state: seed from the page URL first, then let
    /// explicit flags override.
    fn into_state(self) -> FilterState {
        let mut state = match self.url {
            Some(url) => FilterState::from_url(&url),
            None => FilterState::new(),
        };
        if let Some(search) = self.search {
            state.search_term = search;
        }
        if let Some(category) = self.category {
            state.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            state.difficulty = difficulty;
        }
        state
    }
}

/// List the collection, narrowed by the given filters.
///
/// Fetch failures degrade to an empty listing, the same way the discovery
/// page shows its empty state instead of an error.
pub async fn list(
    backend: &dyn RecipeBackend,
    store: &dyn KeyValueStore,
    filters: ListFilters,
    select: Option<String>,
) -> Result<()> {
    let state = filters.into_state();
    let recipes = fetch_recipes_or_empty(backend).await;
    let filtered = filter_recipes(&recipes, &state);

    for recipe in &filtered {
        println!(
            "  {} - {} ({}) - {} min [id {}]",
            recipe.title,
            recipe.category.as_deref().unwrap_or("-"),
            recipe.difficulty.as_deref().unwrap_or("-"),
            recipe.total_time(),
            recipe.id
        );
    }
    println!("{}", ListingSummary::new(&state, filtered.len(), recipes.len()));

    if let Some(id) = select {
        let Some(recipe) = filtered.iter().find(|recipe| recipe.id == id) else {
            bail!("No recipe with id {} in the current listing", id);
        };
        select_recipe(store, recipe)?;
        println!("Selected: {}", recipe.title);
    }

    Ok(())
}

/// Print the recipe saved by `recipes --select`.
pub fn show(store: &dyn KeyValueStore) -> Result<()> {
    let Some(recipe) = selected_recipe(store) else {
        bail!("No recipe selected; run `cooksy recipes --select <id>` first");
    };
    print_detail(&recipe);
    Ok(())
}

fn print_detail(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("{}", "=".repeat(50));
    if let Some(description) = &recipe.description {
        println!("{}", description);
        println!();
    }
    println!("Category: {}", recipe.category.as_deref().unwrap_or("-"));
    println!("Difficulty: {}", recipe.difficulty.as_deref().unwrap_or("-"));
    println!(
        "Time: {} min prep + {} min cook = {} min",
        recipe.prep_time,
        recipe.cook_time,
        recipe.total_time()
    );
    println!("Servings: {}", recipe.servings);
    println!("Rating: {}", recipe.rating);

    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient);
        }
    }

    if !recipe.instructions.is_empty() {
        println!();
        println!("Instructions:");
        for (index, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }
}
