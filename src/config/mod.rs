pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use types::*;

use crate::journal::JournalLayout;
use crate::validation_output::Remediation;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Main configuration loading function
///
/// A missing config file is not an error; defaults apply. Returns the parsed input
/// together with the directory relative paths are resolved against.
pub fn load_config(config_file: &str) -> Result<(ConfigInput, PathBuf)> {
    let config_dir = Path::new(config_file)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let config_input = if Path::new(config_file).exists() {
        let contents = std::fs::read_to_string(config_file)
            .with_context(|| format!("Failed to read config file: {}", config_file))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", config_file))?
    } else {
        ConfigInput::default()
    };

    Ok((config_input, config_dir))
}

impl Config {
    /// Journal layout with the migrations directory resolved against `root_dir`
    pub fn journal_layout(&self, root_dir: &Path) -> JournalLayout {
        JournalLayout {
            migrations_dir: root_dir.join(&self.directories.migrations),
            extension: self.journal.extension.clone(),
            meta_dir: self.journal.meta_dir.clone(),
            journal_file: self.journal.journal_file.clone(),
        }
    }

    pub fn remediation(&self) -> Remediation {
        Remediation {
            fix_command: self.gate.remediation_command.clone(),
            bypass_command: self.gate.bypass_command.clone(),
        }
    }
}
