mod chat;
mod create;
mod recipes;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cooksy_core::{clear_token, save_token, Config, Difficulty, DiskStore, HttpBackend};

#[derive(Parser)]
#[command(name = "cooksy")]
#[command(about = "Cooksy CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, with optional filters
    Recipes {
        /// Backend base URL (default: COOKSY_BACKEND_URL or http://localhost:5000)
        #[arg(long)]
        server: Option<String>,
        /// Seed filters from a discovery page URL (reads category and search)
        #[arg(long)]
        url: Option<String>,
        /// Free-text search over titles, ingredients and descriptions
        #[arg(long)]
        search: Option<String>,
        /// Category filter (Desayuno, Almuerzo, Cena, Postre, Snack)
        #[arg(long)]
        category: Option<String>,
        #[arg(long, help = difficulty_filter_help())]
        difficulty: Option<String>,
        /// Save the recipe with this id as the current selection
        #[arg(long)]
        select: Option<String>,
    },
    /// Show the currently selected recipe
    Show,
    /// Submit a new recipe
    Create {
        /// Backend base URL (default: COOKSY_BACKEND_URL or http://localhost:5000)
        #[arg(long)]
        server: Option<String>,
        #[command(flatten)]
        args: create::CreateArgs,
    },
    /// Ask the assistant for recipe ideas
    Chat {
        /// Question for the assistant
        question: String,
    },
    /// Save an auth token for submissions
    Login {
        /// Bearer token issued by the backend
        #[arg(long)]
        token: String,
    },
    /// Remove the saved auth token
    Logout,
}

/// Help text listing the dropdown difficulty vocabulary.
fn difficulty_filter_help() -> String {
    let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.filter_label()).collect();
    format!("Difficulty filter ({})", labels.join(", "))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let store = Arc::new(DiskStore::new(config.data_dir.clone()));

    match cli.command {
        Commands::Recipes {
            server,
            url,
            search,
            category,
            difficulty,
            select,
        } => {
            let backend = HttpBackend::new(server.unwrap_or_else(|| config.backend_url.clone()));
            recipes::list(
                &backend,
                store.as_ref(),
                recipes::ListFilters {
                    url,
                    search,
                    category,
                    difficulty,
                },
                select,
            )
            .await?;
        }
        Commands::Show => {
            recipes::show(store.as_ref())?;
        }
        Commands::Create { server, args } => {
            let backend = HttpBackend::new(server.unwrap_or_else(|| config.backend_url.clone()));
            create::create(Arc::new(backend), store, args).await?;
        }
        Commands::Chat { question } => {
            chat::chat(&config, &question).await?;
        }
        Commands::Login { token } => {
            save_token(store.as_ref(), &token)?;
            println!("Token saved");
        }
        Commands::Logout => {
            clear_token(store.as_ref())?;
            println!("Token removed");
        }
    }

    Ok(())
}
