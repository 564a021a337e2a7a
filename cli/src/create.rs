use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cooksy_core::{
    Difficulty, DraftRecipe, ImageStaging, KeyValueStore, RecipeBackend, RecipeSubmitter,
};

/// Form fields for the submission workflow.
///
/// Text fields default to empty so validation, not argument parsing,
/// reports what is missing, the same way the submission form does.
#[derive(clap::Args)]
pub struct CreateArgs {
    /// Recipe title
    #[arg(long, default_value = "")]
    pub title: String,
    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Ingredient line, repeatable
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,
    /// Instruction step, repeatable
    #[arg(long = "instruction")]
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    #[arg(long, default_value = "")]
    pub prep_time: String,
    /// Cooking time in minutes
    #[arg(long, default_value = "")]
    pub cook_time: String,
    /// Number of servings
    #[arg(long, default_value = "")]
    pub servings: String,
    #[arg(long, default_value = "", help = difficulty_help())]
    pub difficulty: String,
    /// Image file to attach
    #[arg(long)]
    pub image: Option<PathBuf>,
}

/// Help text listing the form difficulty vocabulary.
fn difficulty_help() -> String {
    let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();
    format!("Difficulty ({})", labels.join(", "))
}

pub async fn create(
    backend: Arc<dyn RecipeBackend>,
    store: Arc<dyn KeyValueStore>,
    args: CreateArgs,
) -> Result<()> {
    let mut draft = DraftRecipe::new();
    draft.title = args.title;
    draft.description = args.description;
    for ingredient in &args.ingredients {
        draft.add_ingredient(ingredient);
    }
    for instruction in &args.instructions {
        draft.add_instruction(instruction);
    }
    draft.prep_time = args.prep_time;
    draft.cook_time = args.cook_time;
    draft.servings = args.servings;
    draft.difficulty = args.difficulty;

    if let Some(path) = &args.image {
        let staging = ImageStaging::new();
        staging
            .select_file(path)
            .await
            .with_context(|| format!("Failed to read image: {}", path.display()))?;
        draft.image_data_uri = staging.staged_data_uri();
        println!("Attached image: {}", path.display());
    }

    let submitter = RecipeSubmitter::new(backend, store);
    let recipe = submitter
        .submit(&draft)
        .await
        .context("Failed to submit recipe")?;

    println!();
    println!("{}", "=".repeat(50));
    println!("RECIPE CREATED");
    println!("{}", "=".repeat(50));
    println!("Id: {}", recipe.id);
    println!("Title: {}", recipe.title);
    println!("Category: {}", recipe.category.as_deref().unwrap_or("-"));
    println!("{}", "=".repeat(50));

    Ok(())
}
