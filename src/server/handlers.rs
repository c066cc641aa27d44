//! Request handlers for the search endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::core::search::SearchOrchestrator;
use crate::core::{CredentialSource, LookupClient, SearchResult};
use crate::utils::error::ErrorKind;

/// `POST /api/search` with `{"keyword": "..."}`.
///
/// A body that is not JSON, or has no string `keyword`, is searched as an
/// empty keyword and therefore rejected as a validation error.
pub async fn search_handler<S, L>(
    State(orchestrator): State<Arc<SearchOrchestrator<S, L>>>,
    body: Bytes,
) -> Response
where
    S: CredentialSource + 'static,
    L: LookupClient + 'static,
{
    let keyword = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("keyword")?.as_str().map(str::to_string))
        .unwrap_or_default();

    let result = orchestrator.search(&keyword).await;
    (status_for(&result), Json(result)).into_response()
}

pub async fn health_handler() -> &'static str {
    "ok"
}

fn status_for(result: &SearchResult) -> StatusCode {
    match result.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::Unexpected) => StatusCode::INTERNAL_SERVER_ERROR,
        Some(_) => StatusCode::BAD_REQUEST,
    }
}
