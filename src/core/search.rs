use crate::core::{
    CredentialSource, LookupClient, PreviewOutcome, SearchObserver, SearchQuery, SearchResult,
};
use crate::utils::error::{Result, RevWhoisError};
use crate::utils::monitor::TracingObserver;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::Instrument;

/// Runs validate → credential → preview → fetch for one keyword.
///
/// Holds no per-request state, so one instance can serve concurrent searches.
pub struct SearchOrchestrator<S: CredentialSource, L: LookupClient> {
    credentials: S,
    client: L,
    observer: Arc<dyn SearchObserver>,
}

impl<S: CredentialSource, L: LookupClient> SearchOrchestrator<S, L> {
    pub fn new(credentials: S, client: L) -> Self {
        Self::new_with_observer(credentials, client, Arc::new(TracingObserver))
    }

    pub fn new_with_observer(
        credentials: S,
        client: L,
        observer: Arc<dyn SearchObserver>,
    ) -> Self {
        Self {
            credentials,
            client,
            observer,
        }
    }

    /// Always yields a well-formed result. Errors and panics from any stage
    /// become `SearchResult::Error`.
    pub async fn search(&self, keyword: &str) -> SearchResult {
        let span = tracing::info_span!("search", keyword = keyword.trim());
        let outcome = AssertUnwindSafe(self.run(keyword).instrument(span))
            .catch_unwind()
            .await;

        let err = match outcome {
            Ok(Ok(result)) => return result,
            Ok(Err(err)) => err,
            Err(panic) => RevWhoisError::Unexpected {
                message: panic_message(panic.as_ref()),
            },
        };

        self.observer.search_failed(keyword.trim(), &err);
        SearchResult::from_error(&err)
    }

    async fn run(&self, keyword: &str) -> Result<SearchResult> {
        let query = SearchQuery::new(keyword)?;
        let keyword = query.keyword();
        self.observer.search_started(keyword);

        let credential = self.credentials.load()?;

        let outcome = self.client.preview(keyword, &credential).await?;
        self.observer.preview_completed(keyword, &outcome);
        if outcome == PreviewOutcome::NotFound {
            return Err(RevWhoisError::NoDomains);
        }

        let fetched = self
            .client
            .fetch(keyword, &credential)
            .await
            .map_err(with_fallback)?;
        self.observer.fetch_completed(keyword, fetched.count);

        Ok(SearchResult::Success {
            domains: fetched.domains,
            count: fetched.count,
            keyword: keyword.to_string(),
        })
    }
}

/// A fetch failure with no reason is reported with the generic fetch message.
fn with_fallback(err: RevWhoisError) -> RevWhoisError {
    match err {
        RevWhoisError::Lookup { message } if message.trim().is_empty() => {
            RevWhoisError::FetchFailed
        }
        other => other,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
