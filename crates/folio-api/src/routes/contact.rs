use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use folio_persist::create_document;
use folio_types::{ContactMessage, Record};

use crate::{
    error::{ApiError, ApiResult},
    extract::ApiJson,
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub status: String,
    pub id: String,
}

impl ContactResponse {
    fn success(id: String) -> Self {
        Self {
            status: "success".to_string(),
            id,
        }
    }
}

/// Store a contact form submission
///
/// The body is validated before the handler runs, so a rejected payload never
/// reaches the store.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing or mistyped field"),
        (status = 500, description = "Store unavailable or insert failed")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(msg): ApiJson<ContactMessage>,
) -> ApiResult<Json<ContactResponse>> {
    let store = state.store.as_deref().ok_or(ApiError::StoreUnavailable)?;

    let id = create_document(store, &msg).await?;

    tracing::info!(
        collection = ContactMessage::COLLECTION,
        id = %id,
        source = %msg.source,
        "Contact message stored"
    );

    Ok(Json(ContactResponse::success(id)))
}
