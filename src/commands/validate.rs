use crate::config::Config;
use crate::journal::{DriftReport, drift_report, validate_journal_sync};
use crate::validation_output::{OutputFormat, ValidationOutputOptions, format_validation_output};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Check journal sync without running migrations. Returns whether the journal is in sync.
pub async fn cmd_validate(
    config: &Config,
    root_dir: &Path,
    options: &ValidationOutputOptions,
) -> Result<bool> {
    let layout = config.journal_layout(root_dir);
    let result = validate_journal_sync(&layout);

    // An unreadable directory was already reported by the validator
    let drift = drift_report(&layout).unwrap_or_else(|e| {
        debug!("Skipping drift report: {:#}", e);
        DriftReport::default()
    });

    let output = format_validation_output(&result, &drift, &config.remediation(), options)?;

    match options.format {
        OutputFormat::Json => println!("{}", output),
        OutputFormat::Human if result.valid => print!("{}", output),
        OutputFormat::Human => eprint!("{}", output),
    }

    Ok(result.valid)
}
