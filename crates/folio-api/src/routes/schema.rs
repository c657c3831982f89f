use axum::{extract::State, Json};
use std::sync::Arc;

use folio_types::Schema;

use crate::state::AppState;

/// Field names of every collection, derived from the record types
#[utoipa::path(
    get,
    path = "/schema",
    responses(
        (status = 200, description = "Collection name mapped to its ordered field names")
    ),
    tag = "meta"
)]
pub async fn schema(State(state): State<Arc<AppState>>) -> Json<Schema> {
    Json(Schema::clone(&state.schema))
}
