use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevWhoisError {
    #[error("Keyword is required")]
    MissingKeyword,

    #[error("API Key not found or invalid. Make sure it exists at ~/.config/whoisxml.conf")]
    CredentialNotFound,

    #[error("API returned status code {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Error occurred while fetching domains: {message}")]
    Lookup { message: String },

    #[error("An error occurred while fetching domains")]
    FetchFailed,

    #[error("No domains found for this keyword")]
    NoDomains,

    #[error("An unexpected error occurred: {message}")]
    Unexpected { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Classification exposed alongside every failed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Credential,
    RemoteUnavailable,
    RemoteProtocol,
    NoResults,
    Unexpected,
}

impl RevWhoisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingKeyword => ErrorKind::Validation,
            Self::CredentialNotFound => ErrorKind::Credential,
            Self::RemoteStatus { .. } | Self::Request(_) => ErrorKind::RemoteUnavailable,
            Self::InvalidJson(_) | Self::Lookup { .. } => ErrorKind::RemoteProtocol,
            Self::FetchFailed => ErrorKind::RemoteUnavailable,
            Self::NoDomains => ErrorKind::NoResults,
            Self::Unexpected { .. } | Self::IoError(_) => ErrorKind::Unexpected,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorKind::Validation
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "Check the keyword and configuration values and try again",
            ErrorKind::Credential => {
                "Write your WhoisXML API key to ~/.config/whoisxml.conf or pass --credential-path"
            }
            ErrorKind::RemoteUnavailable => {
                "Check network connectivity and the API key's remaining credits, then retry"
            }
            ErrorKind::RemoteProtocol => "The lookup service returned an unexpected payload",
            ErrorKind::NoResults => "Try a broader keyword",
            ErrorKind::Unexpected => "Re-run with --verbose and inspect the logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, RevWhoisError>;
