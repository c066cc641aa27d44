//! HTTP front end for the search orchestrator.
//!
//! Provides two endpoints:
//! - `POST /api/search` - runs one reverse WHOIS search
//! - `GET /health` - liveness probe

mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::core::search::SearchOrchestrator;
use crate::core::{CredentialSource, LookupClient};
use handlers::{health_handler, search_handler};

pub fn router<S, L>(orchestrator: Arc<SearchOrchestrator<S, L>>) -> Router
where
    S: CredentialSource + 'static,
    L: LookupClient + 'static,
{
    Router::new()
        .route("/api/search", post(search_handler::<S, L>))
        .route("/health", get(health_handler))
        .with_state(orchestrator)
}

/// Binds `bind` and serves until the process is stopped.
pub async fn start_server<S, L>(
    bind: &str,
    orchestrator: Arc<SearchOrchestrator<S, L>>,
) -> Result<(), anyhow::Error>
where
    S: CredentialSource + 'static,
    L: LookupClient + 'static,
{
    let app = router(orchestrator);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind search server to {}: {}", bind, e))?;

    tracing::info!("🚀 Search server listening on http://{}/", bind);
    tracing::info!("  - Search: POST http://{}/api/search", bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Search server error: {}", e))?;

    Ok(())
}
