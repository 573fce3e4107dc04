use crate::config::{Config, ConfigBuilder, ConfigInput};
use anyhow::{Result, anyhow};
use std::path::Path;

/// Config subcommands
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., directories.migrations, gate.remediation_command)
        key: String,
    },

    /// List all configuration values
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Validate configuration file
    Validate,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Execute config command
pub async fn cmd_config(
    config: &Config,
    config_file: &str,
    subcommand: Option<ConfigCommands>,
) -> Result<()> {
    match subcommand {
        Some(ConfigCommands::Get { key }) => {
            println!("{}", get_config_value(config, &key)?);
            Ok(())
        }

        Some(ConfigCommands::List { format }) => {
            println!("{}", render_config(config, format)?);
            Ok(())
        }

        Some(ConfigCommands::Validate) => {
            validate_config_file(config_file)?;
            println!("✅ Configuration file '{}' is valid", config_file);
            Ok(())
        }

        None => {
            println!("migsync config - Inspect migsync configuration");
            println!();
            println!("Usage:");
            println!("  migsync config get <KEY>     Get a configuration value");
            println!("  migsync config list          List all configuration values");
            println!("  migsync config validate      Validate configuration file");
            println!();
            println!("Examples:");
            println!("  migsync config get directories.migrations");
            println!("  migsync config list --format json");
            Ok(())
        }
    }
}

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["directories", "migrations"] => Ok(config.directories.migrations.clone()),

        ["journal", "meta_dir"] => Ok(config.journal.meta_dir.clone()),
        ["journal", "journal_file"] => Ok(config.journal.journal_file.clone()),
        ["journal", "extension"] => Ok(config.journal.extension.clone()),

        ["gate", "command"] => Ok(config.gate.command.join(" ")),
        ["gate", "remediation_command"] => Ok(config.gate.remediation_command.clone()),
        ["gate", "bypass_command"] => Ok(config.gate.bypass_command.clone()),

        _ => Err(anyhow!("Unknown configuration key: {}", key)),
    }
}

fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
    })
}

/// Validate configuration file
fn validate_config_file(config_file: &str) -> Result<()> {
    let config_path = Path::new(config_file);
    if !config_path.exists() {
        return Err(anyhow!("Configuration file '{}' not found", config_file));
    }

    let config_str = std::fs::read_to_string(config_path)?;
    let config_input: ConfigInput =
        serde_yaml::from_str(&config_str).map_err(|e| anyhow!("Invalid YAML syntax: {}", e))?;

    ConfigBuilder::new().with_file(config_input).resolve()?;

    Ok(())
}
