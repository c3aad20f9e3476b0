use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Movie, YearRange},
    routes::AppState,
    services::movies::{search_movies, trending_movies, MovieSearch, DEFAULT_RESULTS},
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
    results: Option<usize>,
    year_min: Option<i32>,
    year_max: Option<i32>,
}

impl SearchQuery {
    /// A year filter applies as soon as either bound is given
    fn year_range(&self) -> Option<YearRange> {
        if self.year_min.is_none() && self.year_max.is_none() {
            return None;
        }
        let default = YearRange::default();
        Some(YearRange::new(
            self.year_min.unwrap_or(default.min),
            self.year_max.unwrap_or(default.max),
        ))
    }
}

/// Handler for movie search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    if params.q.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    let search = MovieSearch::new(params.q.clone())
        .with_results(params.results.unwrap_or(DEFAULT_RESULTS))
        .with_year_range(params.year_range());

    let movies = search_movies(state.movie_catalog.as_ref(), &state.genres, &search).await;

    tracing::info!(
        request_id = %request_id,
        query = %params.q,
        results = movies.len(),
        "Movie search handled"
    );

    Ok(Json(movies))
}

/// Handler for trending movies endpoint
pub async fn trending(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(trending_movies(state.movie_catalog.as_ref(), &state.genres).await)
}
