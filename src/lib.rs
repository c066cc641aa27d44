pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{FileCredentialSource, WhoisXmlClient};
pub use config::{LookupSettings, Settings};
pub use core::search::SearchOrchestrator;
pub use domain::model::SearchResult;
pub use utils::error::{ErrorKind, Result, RevWhoisError};
