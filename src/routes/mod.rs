use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

pub mod dishes;
pub mod movies;
pub mod pairings;
pub mod recipes;
pub mod state;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(status))
        .route("/movies/search", get(movies::search))
        .route("/movies/trending", get(movies::trending))
        .route("/pairings", post(pairings::create))
        .route("/dishes/extract", post(dishes::extract))
        .route("/recipes/search", get(recipes::search))
        .route("/links/order", get(recipes::order_links))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub movie_catalog: &'static str,
    /// False when the genre table could not be loaded at startup
    pub movie_catalog_connected: bool,
    pub genres: usize,
    pub language_model: String,
    pub recipe_catalog: &'static str,
}

/// Which collaborators are configured and whether the catalog answered at startup
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        movie_catalog: state.movie_catalog.name(),
        movie_catalog_connected: !state.genres.is_empty(),
        genres: state.genres.len(),
        language_model: state.language_model.model(),
        recipe_catalog: state.resolver.catalog_name(),
    })
}
