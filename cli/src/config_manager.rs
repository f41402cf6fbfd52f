use crate::{cli::Cli, config::ConfigFile};
use std::fs;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Loads the configuration file and layers command line overrides on top.
pub struct ConfigManager {
    config_path: String,
    config: ConfigFile,
}

impl ConfigManager {
    /// Creates a manager for `config_path`. A missing or unreadable file
    /// yields the defaults.
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        let config_path = config_path.as_ref().to_string_lossy().to_string();
        let config = match Self::load_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring configuration file {config_path}: {e}");
                ConfigFile::default()
            }
        };

        Self {
            config_path,
            config,
        }
    }

    /// Loads configuration from file
    pub fn load_config(path: &str) -> Result<ConfigFile, Box<dyn std::error::Error + Send + Sync>> {
        if !Path::new(path).exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(path)?;
        let config: ConfigFile = if path.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        Ok(config)
    }

    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        fs::write(&self.config_path, render(&self.config, &self.config_path)?)?;
        Ok(())
    }

    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    pub fn get_config(&self) -> &ConfigFile {
        &self.config
    }

    /// Command line values win over file values; unset flags leave the file
    /// value in place.
    pub fn merge_with_cli_args(&mut self, cli_args: &Cli) {
        let node = &mut self.config.node;
        if let Some(scheme) = cli_args.scheme {
            node.scheme = scheme;
        }
        if let Some(host) = &cli_args.host {
            node.host = host.clone();
        }
        if let Some(port) = cli_args.port {
            node.port = port;
        }
        if let Some(timeout) = cli_args.timeout {
            node.timeout_seconds = timeout;
        }
        if cli_args.insecure {
            node.accept_invalid_certs = true;
        }

        let logging = &mut self.config.logging;
        if let Some(level) = &cli_args.log_level {
            logging.level = level.to_lowercase();
        }
        if cli_args.log_to_file {
            logging.log_to_file = true;
        }
    }

    /// Validates the current configuration, collecting every problem.
    pub fn validate_config(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.config.node.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if self.config.node.timeout_seconds == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !LOG_LEVELS.contains(&self.config.logging.level.as_str()) {
            errors.push("Log level must be one of: trace, debug, info, warn, error".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a default configuration file at the specified path
    pub fn create_default_config<P: AsRef<Path>>(
        path: P,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path_str = path.as_ref().to_string_lossy();
        let content = render(&ConfigFile::default(), &path_str)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn render(
    config: &ConfigFile,
    path: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    if path.ends_with(".json") {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}
