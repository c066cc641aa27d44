use crate::utils::error::{ErrorKind, Result, RevWhoisError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// API key for the reverse-WHOIS service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub const MIN_LEN: usize = 2;

    /// Trims the raw file contents and rejects anything shorter than two characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < Self::MIN_LEN {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
}

impl SearchQuery {
    pub fn new(keyword: &str) -> Result<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(RevWhoisError::MissingKeyword);
        }
        Ok(Self {
            keyword: keyword.to_string(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutcome {
    Exists { count: u64 },
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub domains: Vec<serde_json::Value>,
    pub count: u64,
}

/// `mode` field of the lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    Preview,
    Purchase,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest<'a> {
    pub api_key: &'a str,
    pub search_type: &'static str,
    pub mode: LookupMode,
    pub punycode: bool,
    pub basic_search_terms: SearchTerms<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchTerms<'a> {
    pub include: Vec<&'a str>,
}

impl<'a> LookupRequest<'a> {
    pub fn new(keyword: &'a str, credential: &'a Credential, mode: LookupMode) -> Self {
        Self {
            api_key: credential.expose(),
            search_type: "current",
            mode,
            punycode: true,
            basic_search_terms: SearchTerms {
                include: vec![keyword],
            },
        }
    }
}

/// Fields read back from either mode. Absent or null fields fall back to empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains_list: Vec<serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResult {
    Success {
        domains: Vec<serde_json::Value>,
        count: u64,
        keyword: String,
    },
    Error {
        message: String,
        #[serde(skip)]
        kind: ErrorKind,
    },
}

impl SearchResult {
    pub fn from_error(err: &RevWhoisError) -> Self {
        Self::Error {
            message: err.to_string(),
            kind: err.kind(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}
