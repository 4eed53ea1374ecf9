//! Liveness endpoint. Does not contact the object store.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Active storage backend (`s3` or `local`)
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    )
)]
pub async fn liveness(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        storage: state.storage.backend_type().to_string(),
    })
}
