use crate::constants::SKIP_VALIDATION_FLAG;
use crate::journal::{DriftReport, ValidationResult};
use anyhow::Result;
use serde::Serialize;

/// Output format for `migsync validate`
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON for CI systems
    Json,
}

/// Options for validation output formatting
#[derive(Debug, Clone, Default)]
pub struct ValidationOutputOptions {
    pub format: OutputFormat,
    /// Show unregistered and orphaned migrations in human output
    pub verbose: bool,
}

/// Commands suggested by the failure diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remediation {
    /// Regenerates or repairs the journal
    pub fix_command: String,
    /// Reruns migrations with the gate bypassed
    pub bypass_command: String,
}

/// JSON output structure for validation results (CI integration)
#[derive(Debug, Serialize)]
pub struct ValidationJsonOutput<'a> {
    /// "in_sync" or "out_of_sync"
    pub status: &'static str,
    pub exit_code: i32,
    #[serde(flatten)]
    pub result: &'a ValidationResult,
    #[serde(flatten)]
    pub drift: &'a DriftReport,
}

pub fn format_success_line(result: &ValidationResult) -> String {
    format!("✅ {}", result.message)
}

pub fn format_bypass_warning() -> String {
    format!(
        "⚠️  WARNING: Skipping journal sync validation ({} flag)",
        SKIP_VALIDATION_FLAG
    )
}

/// Multi-section diagnostic printed when validation fails.
///
/// Operator tooling scrapes this text, so its layout is fixed.
pub fn format_failure_diagnostic(result: &ValidationResult, remediation: &Remediation) -> String {
    let mut output = String::new();

    output.push_str("❌ Migration validation failed:\n");
    output.push_str(&format!("   {}\n", result.message));
    output.push('\n');
    output.push_str("Details:\n");
    output.push_str(&format!("   SQL files:       {}\n", result.sql_count));
    output.push_str(&format!("   Journal entries: {}\n", result.journal_count));
    output.push('\n');
    output.push_str("This usually means migration files were created but not registered.\n");
    output.push_str("To fix this, run:\n");
    output.push('\n');
    output.push_str(&format!("   {}\n", remediation.fix_command));
    output.push('\n');
    output.push_str("If you need to bypass this check (emergency only), use:\n");
    output.push_str(&format!("   {}\n", remediation.bypass_command));

    output
}

/// Format validation results for the `validate` command
pub fn format_validation_output(
    result: &ValidationResult,
    drift: &DriftReport,
    remediation: &Remediation,
    options: &ValidationOutputOptions,
) -> Result<String> {
    match options.format {
        OutputFormat::Json => {
            let output = ValidationJsonOutput {
                status: if result.valid { "in_sync" } else { "out_of_sync" },
                exit_code: if result.valid { 0 } else { 1 },
                result,
                drift,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Human => {
            let mut output = if result.valid {
                format!("{}\n", format_success_line(result))
            } else {
                format_failure_diagnostic(result, remediation)
            };

            if options.verbose && !drift.is_clean() {
                output.push('\n');
                output.push_str(&format_drift_details(drift));
            }

            Ok(output)
        }
    }
}

fn format_drift_details(drift: &DriftReport) -> String {
    let mut output = String::new();

    let sections = [
        ("Not registered in the journal", &drift.unregistered),
        ("Journal entries without a file", &drift.orphaned),
        ("Not named NNNN_name.sql", &drift.unversioned),
    ];

    for (title, names) in sections {
        if names.is_empty() {
            continue;
        }
        output.push_str(&format!("🔍 {}:\n", title));
        for name in names {
            output.push_str(&format!("   - {}\n", name));
        }
    }

    output
}
