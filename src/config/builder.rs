use crate::config::{merge::Merge, types::*};
use crate::constants::MIGRATIONS_DIR_ENV;
use anyhow::{Result, bail};

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            directories: self.resolve_directories(&defaults.directories),
            journal: self.resolve_journal(&defaults.journal)?,
            gate: self.resolve_gate(&defaults.gate),
        })
    }

    fn resolve_directories(&self, defaults: &Directories) -> Directories {
        let dir_input = self.config_input.directories.as_ref();

        Directories {
            migrations: dir_input
                .and_then(|d| d.migrations_dir.as_ref())
                .cloned()
                .or_else(|| std::env::var(MIGRATIONS_DIR_ENV).ok())
                .unwrap_or_else(|| defaults.migrations.clone()),
        }
    }

    fn resolve_journal(&self, defaults: &Journal) -> Result<Journal> {
        let journal_input = self.config_input.journal.as_ref();

        let meta_dir = journal_input
            .and_then(|j| j.meta_dir.as_ref())
            .cloned()
            .unwrap_or_else(|| defaults.meta_dir.clone());

        let journal_file = journal_input
            .and_then(|j| j.journal_file.as_ref())
            .cloned()
            .unwrap_or_else(|| defaults.journal_file.clone());

        // Accept both "sql" and ".sql"
        let extension = journal_input
            .and_then(|j| j.extension.as_deref())
            .map(|ext| ext.trim_start_matches('.').to_string())
            .unwrap_or_else(|| defaults.extension.clone());

        if meta_dir.is_empty() || journal_file.is_empty() {
            bail!("journal.meta_dir and journal.journal_file must not be empty");
        }
        if extension.is_empty() {
            bail!("journal.extension must not be empty");
        }

        Ok(Journal {
            meta_dir,
            journal_file,
            extension,
        })
    }

    fn resolve_gate(&self, defaults: &Gate) -> Gate {
        let gate_input = self.config_input.gate.as_ref();

        Gate {
            command: gate_input
                .and_then(|g| g.command.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.command.clone()),
            remediation_command: gate_input
                .and_then(|g| g.remediation_command.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.remediation_command.clone()),
            bypass_command: gate_input
                .and_then(|g| g.bypass_command.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.bypass_command.clone()),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
