use std::sync::Arc;

use hangry_api::{
    config::Config,
    models::GenreMap,
    routes::{create_router, AppState},
    services::providers::{self, GroqProvider, MealDbProvider, MovieCatalog, TmdbProvider},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hangry_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let http_client = providers::http_client(config.http_timeout_secs)?;

    let movie_catalog = Arc::new(TmdbProvider::new(
        http_client.clone(),
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.tmdb_image_url.clone(),
    ));
    let language_model = Arc::new(GroqProvider::new(
        http_client.clone(),
        config.groq_api_key.clone(),
        config.groq_api_url.clone(),
        config.groq_model.clone(),
    ));
    let recipe_catalog = Arc::new(MealDbProvider::new(
        http_client,
        config.mealdb_api_url.clone(),
    ));

    // The genre table is read-only for the life of the process.
    let genres = match movie_catalog.genres().await {
        Ok(genres) => genres,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load genres, continuing without them");
            GenreMap::default()
        }
    };

    let state = AppState::new(movie_catalog, language_model, recipe_catalog, genres);
    let app = create_router(Arc::new(state));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, model = %config.groq_model, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
