//! Recipe backend trait and implementations.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{FetchError, SubmitError};
use crate::types::{CreateRecipePayload, Recipe};

/// Trait for the recipe backend, enabling mockability in tests.
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// Fetch the whole recipe collection.
    ///
    /// The collection is narrowed client-side, so there are no query
    /// parameters here.
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError>;

    /// Create a recipe, authenticating with the given bearer token.
    ///
    /// Implementations only produce the `Backend` and `Network` variants of
    /// [`SubmitError`]; validation happens before this is called.
    async fn create_recipe(
        &self,
        payload: &CreateRecipePayload,
        token: &str,
    ) -> Result<Recipe, SubmitError>;
}

/// Production backend speaking JSON over HTTP.
///
/// Reads come from `{base}/recipes`; creation posts to `{base}/api/recipes`.
/// The two prefixes differ because the deployment routes them separately.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    fn create_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        // Validate the URL first so a bad base URL fails before the request.
        let url = reqwest::Url::parse(&self.collection_url())
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        tracing::debug!(%url, "fetching recipe collection");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "collection fetch failed");
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
            });
        }

        let recipes: Vec<Recipe> = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))?;
        tracing::debug!(count = recipes.len(), "fetched recipe collection");
        Ok(recipes)
    }

    async fn create_recipe(
        &self,
        payload: &CreateRecipePayload,
        token: &str,
    ) -> Result<Recipe, SubmitError> {
        let url = self.create_url();
        tracing::debug!(%url, title = %payload.title, "submitting recipe");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend rejected recipe");
            // The response body is not inspected; the status code is all the
            // workflow reports.
            return Err(SubmitError::Backend {
                status: status.as_u16(),
            });
        }

        response
            .json::<Recipe>()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))
    }
}

/// Scripted outcome for [`MockBackend`] creations.
#[derive(Debug, Clone, Copy)]
enum CreateOutcome {
    Accept,
    Reject { status: u16 },
    NetworkFailure,
}

/// Mock backend for testing.
///
/// Serves a scripted collection and records every creation request it
/// receives.
pub struct MockBackend {
    recipes: Vec<Recipe>,
    fetch_status: Option<u16>,
    create_outcome: CreateOutcome,
    created: Mutex<Vec<(CreateRecipePayload, String)>>,
}

impl MockBackend {
    /// Create a mock with an empty collection that accepts every creation.
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            fetch_status: None,
            create_outcome: CreateOutcome::Accept,
            created: Mutex::new(Vec::new()),
        }
    }

    /// Set the collection served by `fetch_recipes`.
    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    /// Make `fetch_recipes` fail with the given HTTP status.
    pub fn with_fetch_status(mut self, status: u16) -> Self {
        self.fetch_status = Some(status);
        self
    }

    /// Make `create_recipe` fail with the given HTTP status.
    pub fn with_create_rejection(mut self, status: u16) -> Self {
        self.create_outcome = CreateOutcome::Reject { status };
        self
    }

    /// Make `create_recipe` fail as if the backend were unreachable.
    pub fn with_create_network_failure(mut self) -> Self {
        self.create_outcome = CreateOutcome::NetworkFailure;
        self
    }

    /// Payloads received by `create_recipe`, in call order.
    pub fn created(&self) -> Vec<CreateRecipePayload> {
        self.created
            .lock()
            .unwrap()
            .iter()
            .map(|(payload, _)| payload.clone())
            .collect()
    }

    /// Token sent with the most recent creation, if any.
    pub fn last_token(&self) -> Option<String> {
        self.created
            .lock()
            .unwrap()
            .last()
            .map(|(_, token)| token.clone())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn echo_recipe(id: String, payload: &CreateRecipePayload) -> Recipe {
    Recipe {
        id,
        title: payload.title.clone(),
        description: Some(payload.description.clone()),
        ingredients: payload.ingredients.clone(),
        instructions: payload.instructions.clone(),
        category: Some(payload.category.clone()),
        difficulty: Some(payload.difficulty.clone()),
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        servings: payload.servings,
        image_url: (!payload.image_url.is_empty()).then(|| payload.image_url.clone()),
        rating: payload.rating,
    }
}

#[async_trait]
impl RecipeBackend for MockBackend {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        match self.fetch_status {
            Some(status) => Err(FetchError::BadStatus { status }),
            None => Ok(self.recipes.clone()),
        }
    }

    async fn create_recipe(
        &self,
        payload: &CreateRecipePayload,
        token: &str,
    ) -> Result<Recipe, SubmitError> {
        let mut created = self.created.lock().unwrap();
        created.push((payload.clone(), token.to_string()));

        match self.create_outcome {
            CreateOutcome::Accept => Ok(echo_recipe(format!("mock-{}", created.len()), payload)),
            CreateOutcome::Reject { status } => Err(SubmitError::Backend { status }),
            CreateOutcome::NetworkFailure => {
                Err(SubmitError::Network("connection refused".to_string()))
            }
        }
    }
}
