use anyhow::{Context, Result};
use cooksy_core::{ask, create_assistant, Config};

/// Ask the assistant and print its suggestions.
pub async fn chat(config: &Config, question: &str) -> Result<()> {
    let assistant = create_assistant(config);
    tracing::debug!(assistant = assistant.name(), "sending question");

    let recipes = ask(assistant.as_ref(), question)
        .await
        .context("Assistant request failed")?;

    if recipes.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    println!("Suggestions:");
    for recipe in &recipes {
        if recipe.ingredients.is_empty() {
            println!("  {}", recipe.title);
        } else {
            println!("  {} ({})", recipe.title, recipe.ingredients.join(", "));
        }
    }

    Ok(())
}
