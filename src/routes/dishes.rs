use axum::Json;
use serde::Deserialize;

use crate::{models::DishTriple, services::extractor::extract_dishes};

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// Handler for dish extraction from a pairing suggestion
pub async fn extract(Json(request): Json<ExtractRequest>) -> Json<DishTriple> {
    Json(extract_dishes(&request.text))
}
