use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{ManualSearchLinks, OrderLink, RecipeRecord},
    routes::AppState,
    services::links::{self, manual_search_links},
};

#[derive(Debug, Deserialize)]
pub struct DishQuery {
    dish: String,
}

impl DishQuery {
    fn dish(&self) -> AppResult<&str> {
        let dish = self.dish.trim();
        if dish.is_empty() {
            return Err(AppError::InvalidInput("Dish name cannot be empty".to_string()));
        }
        Ok(dish)
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeSearchResponse {
    pub dish: String,
    /// Name after punctuation and flair words were stripped
    pub normalized: String,
    pub recipe: Option<RecipeRecord>,
    /// Present only when no recipe was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_search: Option<ManualSearchLinks>,
}

/// Handler for recipe lookup with fallback resolution
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DishQuery>,
) -> AppResult<Json<RecipeSearchResponse>> {
    let dish = params.dish()?;

    let recipe = state.resolver.resolve(dish).await;
    let manual_search = recipe.is_none().then(|| manual_search_links(dish));

    Ok(Json(RecipeSearchResponse {
        dish: dish.to_string(),
        normalized: state.resolver.normalizer().normalize(dish),
        recipe,
        manual_search,
    }))
}

/// Handler for delivery deep links
pub async fn order_links(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DishQuery>,
) -> AppResult<Json<Vec<OrderLink>>> {
    let dish = params.dish()?;
    Ok(Json(links::order_links(dish, state.resolver.normalizer())))
}
