use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use folio_persist::DocumentStore;

use crate::{error::truncate_detail, state::AppState};

/// Collections listed in the report
const MAX_COLLECTIONS: usize = 10;
/// Longest error detail in the report
const MAX_DETAIL_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BackendState {
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseState {
    /// No store handle was created at startup
    NotInitialized,
    /// A handle exists but has not answered a query yet
    Available,
    /// Listing collections succeeded
    Connected,
    /// Listing collections failed
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseStatus {
    pub state: DatabaseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DatabaseStatus {
    fn new(state: DatabaseState) -> Self {
        Self { state, detail: None }
    }

    fn error(detail: impl Into<String>) -> Self {
        Self {
            state: DatabaseState::Error,
            detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SettingState {
    Set,
    NotSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    NotConnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: BackendState,
    pub database: DatabaseStatus,
    pub database_url: SettingState,
    pub database_name: Option<String>,
    pub connection_status: ConnectionStatus,
    pub collections: Vec<String>,
}

/// Report on the backend and its document store
///
/// Always answers 200. Each fact is gathered on its own, so a failing live
/// query still leaves the configuration facts in the report.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsResponse)
    ),
    tag = "meta"
)]
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let report = probe(
        state.store.as_deref(),
        state.config.database_url_configured(),
    )
    .await;

    Json(report)
}

pub async fn probe(store: Option<&dyn DocumentStore>, url_configured: bool) -> DiagnosticsResponse {
    let mut report = DiagnosticsResponse {
        backend: BackendState::Running,
        database: DatabaseStatus::new(DatabaseState::NotInitialized),
        database_url: if url_configured {
            SettingState::Set
        } else {
            SettingState::NotSet
        },
        database_name: None,
        connection_status: ConnectionStatus::NotConnected,
        collections: Vec::new(),
    };

    let Some(store) = store else {
        return report;
    };

    report.database = DatabaseStatus::new(DatabaseState::Available);
    report.database_name = Some(store.database_name().to_string());
    report.connection_status = ConnectionStatus::Connected;

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = DatabaseStatus::new(DatabaseState::Connected);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Diagnostics query failed");
            report.database = DatabaseStatus::error(truncate_detail(&e.to_string(), MAX_DETAIL_CHARS));
        }
    }

    report
}
