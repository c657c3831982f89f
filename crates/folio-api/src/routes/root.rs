use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = RootResponse)
    ),
    tag = "meta"
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} running", state.config.app.name),
    })
}
