use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use folio_persist::PersistError;

/// Longest error detail returned to clients
pub const MAX_DETAIL_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Database not available")]
    StoreUnavailable,

    #[error("{0}")]
    Persist(#[from] PersistError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::StoreUnavailable => {
                tracing::error!("Request needs the document store but none is configured");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ApiError::Persist(e) => {
                tracing::error!(error = %e, "Persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    truncate_detail(&e.to_string(), MAX_DETAIL_CHARS),
                )
            }
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Cut `message` down to at most `max_chars` characters
pub fn truncate_detail(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((end, _)) => message[..end].to_string(),
        None => message.to_string(),
    }
}
