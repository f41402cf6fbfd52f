pub mod cli;
pub mod commands;
pub mod config;
pub mod config_manager;

pub use cli::{Cli, Command};
pub use config::{ConfigFile, LoggingConfig, NodeConfig};
pub use config_manager::ConfigManager;
