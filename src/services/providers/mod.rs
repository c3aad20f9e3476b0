/// External data providers
///
/// The service talks to three HTTP APIs: a movie catalog, a language model and a recipe
/// catalog. Each sits behind a trait so the pairing pipeline and the recipe resolver can
/// be driven by stubs in tests. Implementations return `AppResult`; deciding that a
/// failure means "no data" is left to the callers.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogMovie, GenreMap, MovieQuery, RecipeRecord},
};

pub mod groq;
pub mod mealdb;
pub mod tmdb;

pub use groq::GroqProvider;
pub use mealdb::MealDbProvider;
pub use tmdb::TmdbProvider;

/// Movie metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by title
    async fn search(&self, query: &MovieQuery) -> AppResult<Vec<CatalogMovie>>;

    /// Genre id to name table, fetched once at startup
    async fn genres(&self) -> AppResult<GenreMap>;

    /// Movies trending this week
    async fn trending(&self) -> AppResult<Vec<CatalogMovie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Text generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Model identifier reported by the status endpoint
    fn model(&self) -> String;
}

/// Recipe lookup by dish name
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// First recipe whose name matches, if any
    async fn search_by_name(&self, name: &str) -> AppResult<Option<RecipeRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the shared reqwest client with a per-request timeout
pub fn http_client(timeout_secs: u64) -> AppResult<HttpClient> {
    Ok(HttpClient::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Turns a non-success status into `AppError::ExternalApi`, keeping the body for context
pub(crate) async fn ensure_success(
    provider: &str,
    response: reqwest::Response,
) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::ExternalApi(format!(
        "{} API returned status {}: {}",
        provider, status, body
    )))
}
