use crate::domain::model::PreviewOutcome;
use crate::domain::ports::SearchObserver;
use crate::utils::error::{ErrorKind, RevWhoisError};

/// Default observer: one `tracing` event per search stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_started(&self, keyword: &str) {
        tracing::info!(keyword, "🔎 Reverse WHOIS search started");
    }

    fn preview_completed(&self, keyword: &str, outcome: &PreviewOutcome) {
        match outcome {
            PreviewOutcome::Exists { count } => {
                tracing::info!(keyword, count, "✅ Preview found matching domains");
            }
            PreviewOutcome::NotFound => {
                tracing::info!(keyword, "❌ Preview found no domains");
            }
        }
    }

    fn fetch_completed(&self, keyword: &str, count: u64) {
        tracing::info!(keyword, count, "📦 Domains fetched");
    }

    fn search_failed(&self, keyword: &str, error: &RevWhoisError) {
        match error.kind() {
            ErrorKind::Validation | ErrorKind::NoResults => {
                tracing::warn!(keyword, kind = ?error.kind(), "⚠️ Search rejected: {}", error);
            }
            kind => {
                tracing::error!(keyword, ?kind, "❌ Search failed: {}", error);
                tracing::error!("💡 Suggestion: {}", error.recovery_suggestion());
            }
        }
    }
}
