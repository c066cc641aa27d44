#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bind_address, validate_credential_path, validate_endpoint, validate_timeout,
    validate_user_agent, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://reverse-whois.whoisxmlapi.com/api/v2";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Resolved settings for the lookup client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSettings {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ConfigProvider for LookupSettings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for LookupSettings {
    fn validate(&self) -> Result<()> {
        validate_endpoint("api.endpoint", &self.api_endpoint)?;
        validate_timeout("api.timeout_seconds", self.timeout_seconds)?;
        validate_user_agent("api.user_agent", &self.user_agent)?;
        Ok(())
    }
}

/// Command-line values that override the file configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub credential_path: Option<String>,
    pub bind_address: Option<String>,
}

/// Everything a run needs, resolved as flag > file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lookup: LookupSettings,
    pub credential_path: Option<String>,
    pub bind_address: String,
}

impl Settings {
    pub fn resolve(file: &TomlConfig, overrides: &Overrides) -> Self {
        let defaults = LookupSettings::default();

        let lookup = LookupSettings {
            api_endpoint: overrides
                .api_endpoint
                .clone()
                .or_else(|| file.api_endpoint().map(str::to_string))
                .unwrap_or(defaults.api_endpoint),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.timeout_seconds())
                .unwrap_or(defaults.timeout_seconds),
            user_agent: file
                .user_agent()
                .map(str::to_string)
                .unwrap_or(defaults.user_agent),
        };

        Self {
            lookup,
            credential_path: overrides
                .credential_path
                .clone()
                .or_else(|| file.credential_path().map(str::to_string)),
            bind_address: overrides
                .bind_address
                .clone()
                .or_else(|| file.bind_address().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.lookup.validate()?;
        if let Some(path) = &self.credential_path {
            validate_credential_path("credentials.path", path)?;
        }
        validate_bind_address("server.bind", &self.bind_address)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::resolve(&TomlConfig::default(), &Overrides::default());

        assert_eq!(settings.lookup, LookupSettings::default());
        assert_eq!(settings.lookup.api_endpoint, DEFAULT_API_ENDPOINT);
        assert!(settings.credential_path.is_none());
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = TomlConfig::from_toml_str(
            r#"
[api]
endpoint = "https://file.example.com/api"
timeout_seconds = 5
user_agent = "file-agent"

[credentials]
path = "/from/file"
"#,
        )
        .unwrap();
        let overrides = Overrides {
            api_endpoint: Some("https://flag.example.com/api".to_string()),
            timeout_seconds: None,
            credential_path: Some("/from/flag".to_string()),
            bind_address: None,
        };

        let settings = Settings::resolve(&file, &overrides);

        assert_eq!(settings.lookup.api_endpoint, "https://flag.example.com/api");
        assert_eq!(settings.lookup.timeout_seconds, 5);
        assert_eq!(settings.lookup.user_agent, "file-agent");
        assert_eq!(settings.credential_path.as_deref(), Some("/from/flag"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let settings = LookupSettings {
            timeout_seconds: 0,
            ..LookupSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let settings = LookupSettings {
            api_endpoint: "reverse-whois".to_string(),
            ..LookupSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        let overrides = Overrides {
            bind_address: Some("5000".to_string()),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&TomlConfig::default(), &overrides);
        assert!(matches!(
            settings.validate(),
            Err(crate::utils::error::RevWhoisError::InvalidConfigValueError { ref field, .. })
                if field == "server.bind"
        ));
    }
}
