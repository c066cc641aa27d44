use crate::config::Overrides;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "revwhois")]
#[command(about = "Reverse WHOIS keyword search backed by the WhoisXML API")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Override the reverse-WHOIS endpoint")]
    pub api_endpoint: Option<String>,

    #[arg(long, global = true, help = "Per-request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "File holding the API key")]
    pub credential_path: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up every domain whose WHOIS record contains the keyword
    Search { keyword: String },
    /// Serve POST /api/search over HTTP
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        let bind_address = match &self.command {
            Command::Serve { bind } => bind.clone(),
            Command::Search { .. } => None,
        };

        Overrides {
            api_endpoint: self.api_endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            credential_path: self.credential_path.clone(),
            bind_address,
        }
    }
}
