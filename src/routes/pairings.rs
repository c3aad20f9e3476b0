use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{PairingRequest, PairingResponse},
    routes::AppState,
};

/// Handler for the full pairing pipeline
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PairingRequest>,
) -> AppResult<Json<PairingResponse>> {
    tracing::info!(
        request_id = %request_id,
        query = %request.query,
        mood = request.mood.label(),
        cuisine = request.cuisine.label(),
        "Processing pairing request"
    );

    let response = state.pairing_service().pair(request).await?;

    tracing::info!(
        request_id = %request_id,
        pairings = response.pairings.len(),
        "Pairing completed"
    );

    Ok(Json(response))
}
