use crate::domain::model::{
    Credential, FetchResult, LookupMode, LookupRequest, LookupResponse, PreviewOutcome,
};
use crate::domain::ports::{ConfigProvider, LookupClient};
use crate::utils::error::{Result, RevWhoisError};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Client for the WhoisXML reverse-WHOIS v2 endpoint.
pub struct WhoisXmlClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> WhoisXmlClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// One POST in the given mode. Failures are classified in order:
    /// status code, JSON syntax, transport, then anything else.
    async fn post(
        &self,
        keyword: &str,
        credential: &Credential,
        mode: LookupMode,
    ) -> Result<LookupResponse> {
        let body = LookupRequest::new(keyword, credential, mode);

        tracing::debug!(
            "📡 POST {} (mode: {:?}, timeout: {}s)",
            self.config.api_endpoint(),
            mode,
            self.config.timeout_seconds()
        );

        let response = self
            .client
            .post(self.config.api_endpoint())
            .header(USER_AGENT, self.config.user_agent())
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!("📡 API response status: {}", status);

        if status != StatusCode::OK {
            tracing::error!("❌ API returned status code {}", status.as_u16());
            return Err(RevWhoisError::RemoteStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&text)?;
        serde_json::from_value(value).map_err(|e| RevWhoisError::Lookup {
            message: e.to_string(),
        })
    }
}

fn log_failure(err: &RevWhoisError) {
    if !matches!(err, RevWhoisError::RemoteStatus { .. }) {
        tracing::error!("❌ {}", err);
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> LookupClient for WhoisXmlClient<C> {
    async fn preview(&self, keyword: &str, credential: &Credential) -> Result<PreviewOutcome> {
        tracing::info!("🔍 Checking if domains exist");

        let response = self
            .post(keyword, credential, LookupMode::Preview)
            .await
            .inspect_err(log_failure)?;

        if response.domains_count > 0 {
            tracing::info!("✅ Domains exist ({})", response.domains_count);
            Ok(PreviewOutcome::Exists {
                count: response.domains_count,
            })
        } else {
            tracing::info!("❌ No domains found");
            Ok(PreviewOutcome::NotFound)
        }
    }

    async fn fetch(&self, keyword: &str, credential: &Credential) -> Result<FetchResult> {
        tracing::info!("⛏️ Fetching domains");

        let response = self
            .post(keyword, credential, LookupMode::Purchase)
            .await
            .inspect_err(log_failure)?;

        Ok(FetchResult {
            domains: response.domains_list,
            count: response.domains_count,
        })
    }
}
