use crate::config::Config;
use crate::gate::{CommandExecutor, GateOutcome, MigrationGate};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Options for `migsync migrate`
#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    pub skip_validation: bool,
    /// Replaces the configured migration command when non-empty
    pub command: Vec<String>,
}

/// Run the migration command behind the journal sync gate
pub async fn cmd_migrate(
    config: &Config,
    root_dir: &Path,
    options: &MigrateOptions,
) -> Result<GateOutcome> {
    let command = if options.command.is_empty() {
        &config.gate.command
    } else {
        &options.command
    };
    let executor = CommandExecutor::from_command_line(command, root_dir)?;

    let gate = MigrationGate::new(config.journal_layout(root_dir), config.remediation())
        .skip_validation(options.skip_validation);

    let outcome = gate
        .run(&executor, &mut std::io::stdout(), &mut std::io::stderr())
        .await?;

    if let GateOutcome::Executed { exit_code, .. } = &outcome {
        info!("Migration command finished with exit code {}", exit_code);
    }

    Ok(outcome)
}
