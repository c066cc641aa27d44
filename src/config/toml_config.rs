use crate::utils::error::{Result, RevWhoisError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file configuration. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub credentials: Option<CredentialsConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RevWhoisError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RevWhoisError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WHOISXML_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RevWhoisError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn api_endpoint(&self) -> Option<&str> {
        self.api.as_ref()?.endpoint.as_deref()
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.api.as_ref()?.timeout_seconds
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.api.as_ref()?.user_agent.as_deref()
    }

    pub fn credential_path(&self) -> Option<&str> {
        self.credentials.as_ref()?.path.as_deref()
    }

    pub fn bind_address(&self) -> Option<&str> {
        self.server.as_ref()?.bind.as_deref()
    }
}
