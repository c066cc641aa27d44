use crate::domain::model::Credential;
use crate::domain::ports::CredentialSource;
use crate::utils::error::{Result, RevWhoisError};
use std::fs;
use std::path::{Path, PathBuf};

pub const CREDENTIAL_FILE: &str = ".config/whoisxml.conf";

/// Reads the API key from a plain-text file on every call.
#[derive(Debug, Clone)]
pub struct FileCredentialSource {
    path: Option<PathBuf>,
}

impl FileCredentialSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `<home>/.config/whoisxml.conf`. Resolution of the home directory is
    /// deferred to `load` so a missing home surfaces as a credential error.
    pub fn from_home() -> Self {
        Self {
            path: dirs::home_dir().map(|home| home.join(CREDENTIAL_FILE)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for FileCredentialSource {
    fn default() -> Self {
        Self::from_home()
    }
}

impl CredentialSource for FileCredentialSource {
    fn load(&self) -> Result<Credential> {
        let Some(path) = &self.path else {
            tracing::error!("❌ Error occurred while reading API key: home directory not found");
            return Err(RevWhoisError::CredentialNotFound);
        };

        let raw = fs::read_to_string(path).map_err(|e| {
            tracing::error!("❌ Error occurred while reading API key: {}", e);
            RevWhoisError::CredentialNotFound
        })?;

        Credential::parse(&raw).ok_or_else(|| {
            tracing::error!("❌ API key in {} is too short", path.display());
            RevWhoisError::CredentialNotFound
        })
    }
}
