use clap::Parser;
use revwhois::config::toml_config::TomlConfig;
use revwhois::utils::{logger, validation::Validate};
use revwhois::{
    CliConfig, Command, FileCredentialSource, SearchOrchestrator, SearchResult, Settings,
    WhoisXmlClient,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.command {
        Command::Serve { .. } => logger::init_json_logger(config.verbose),
        Command::Search { .. } => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting revwhois");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let file_config = match &config.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    let settings = Settings::resolve(&file_config, &config.overrides());

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let credentials = match &settings.credential_path {
        Some(path) => FileCredentialSource::new(path),
        None => FileCredentialSource::from_home(),
    };
    let orchestrator = SearchOrchestrator::new(credentials, WhoisXmlClient::new(settings.lookup));

    match config.command {
        Command::Search { keyword } => {
            let result = orchestrator.search(&keyword).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if let SearchResult::Error { kind, .. } = result {
                tracing::debug!("Search ended with {:?}", kind);
                std::process::exit(1);
            }
        }
        Command::Serve { .. } => {
            revwhois::server::start_server(&settings.bind_address, Arc::new(orchestrator)).await?;
        }
    }

    Ok(())
}
