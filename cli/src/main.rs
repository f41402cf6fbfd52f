use anyhow::Context;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, WriteMode};
use gaia_cli::{commands, Cli, ConfigManager};
use gaia_client::{GaiaClient, RestError};
use log::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle config file creation
    if cli.create_config {
        if let Err(e) = ConfigManager::create_default_config(&cli.config) {
            return Err(anyhow::anyhow!("Failed to create config file: {}", e));
        }
        println!("Created default configuration file: {}", cli.config);
        return Ok(());
    }

    // Load and merge configuration
    let mut config_manager = ConfigManager::new(&cli.config);
    config_manager.merge_with_cli_args(&cli);

    if let Err(errors) = config_manager.validate_config() {
        for error in errors {
            eprintln!("Configuration error: {}", error);
        }
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }

    let config = config_manager.get_config().clone();

    // Set up logging
    let logger = Logger::try_with_str(&config.logging.level)?.write_mode(WriteMode::BufferAndFlush);
    let logger = if config.logging.log_to_file {
        logger.log_to_file(FileSpec::default())
    } else {
        logger.log_to_stderr()
    };
    let _logger = logger.start()?;

    let Some(command) = cli.command else {
        warn!("No command given, nothing to do (see --help)");
        return Ok(());
    };

    let client = GaiaClient::builder(config.node.connection())
        .timeout(config.node.timeout())
        .danger_accept_invalid_certs(config.node.accept_invalid_certs)
        .user_agent(concat!("gaia-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    info!("Using node at {}", client.connection());

    match commands::execute(&client, &command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            if let Some(message) = err.downcast_ref::<RestError>().and_then(RestError::api_message) {
                error!("Node error: {}", message);
            }
            Err(err.context(format!("{:?} failed", command)))
        }
    }
}
