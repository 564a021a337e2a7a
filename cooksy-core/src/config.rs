//! Client configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::store::DiskStore;

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Default suggestion endpoint.
pub const DEFAULT_ASSISTANT_URL: &str = "http://localhost:5000/api/chat";

/// Default model requested from the suggestion endpoint.
pub const DEFAULT_ASSISTANT_MODEL: &str = "gpt-4o-mini";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the recipe backend.
    pub backend_url: String,
    /// URL of the suggestion endpoint.
    pub assistant_url: String,
    /// Model name passed to the suggestion endpoint.
    pub assistant_model: String,
    /// Assistant transport: "http" (default) or "fake" for offline demos.
    pub assistant_mode: String,
    /// Directory for the on-disk session store.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `COOKSY_BACKEND_URL`: backend base URL (default: "http://localhost:5000")
    /// - `COOKSY_ASSISTANT_URL`: suggestion endpoint (default: "http://localhost:5000/api/chat")
    /// - `COOKSY_ASSISTANT_MODEL`: model name (default: "gpt-4o-mini")
    /// - `COOKSY_ASSISTANT`: "http" or "fake" (default: "http")
    /// - `COOKSY_DATA_DIR`: session store directory (default: "~/.cooksy/store")
    pub fn from_env() -> Self {
        let backend_url =
            env::var("COOKSY_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let assistant_url = env::var("COOKSY_ASSISTANT_URL")
            .unwrap_or_else(|_| DEFAULT_ASSISTANT_URL.to_string());

        let assistant_model = env::var("COOKSY_ASSISTANT_MODEL")
            .unwrap_or_else(|_| DEFAULT_ASSISTANT_MODEL.to_string());

        let assistant_mode = env::var("COOKSY_ASSISTANT").unwrap_or_else(|_| "http".to_string());

        let data_dir = env::var("COOKSY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| DiskStore::default_dir());

        Self {
            backend_url,
            assistant_url,
            assistant_model,
            assistant_mode,
            data_dir,
        }
    }
}
