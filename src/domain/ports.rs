use crate::domain::model::{Credential, FetchResult, PreviewOutcome};
use crate::utils::error::{Result, RevWhoisError};
use async_trait::async_trait;

/// Supplies the API key. Called once per search, never cached.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> Result<Credential>;
}

#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn preview(&self, keyword: &str, credential: &Credential) -> Result<PreviewOutcome>;
    async fn fetch(&self, keyword: &str, credential: &Credential) -> Result<FetchResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// Stage events of a single search.
pub trait SearchObserver: Send + Sync {
    fn search_started(&self, _keyword: &str) {}
    fn preview_completed(&self, _keyword: &str, _outcome: &PreviewOutcome) {}
    fn fetch_completed(&self, _keyword: &str, _count: u64) {}
    fn search_failed(&self, _keyword: &str, _error: &RevWhoisError) {}
}
