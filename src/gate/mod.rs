//! Migration gate: nothing reaches the database until the journal check passes.

pub mod executor;

pub use executor::{CommandExecutor, MigrationExecutor};

use crate::journal::{JournalLayout, ValidationResult, validate_journal_sync};
use crate::validation_output::{
    Remediation, format_bypass_warning, format_failure_diagnostic, format_success_line,
};
use anyhow::Result;
use std::io::Write;
use tracing::{info, warn};

/// How a gated migration run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Validation failed; the executor was never started
    Halted(ValidationResult),
    /// The executor ran and exited with `exit_code`
    Executed { exit_code: i32, bypassed: bool },
}

impl GateOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            GateOutcome::Halted(_) => 1,
            GateOutcome::Executed { exit_code, .. } => *exit_code,
        }
    }
}

pub struct MigrationGate {
    layout: JournalLayout,
    remediation: Remediation,
    skip_validation: bool,
}

impl MigrationGate {
    pub fn new(layout: JournalLayout, remediation: Remediation) -> Self {
        Self {
            layout,
            remediation,
            skip_validation: false,
        }
    }

    pub fn skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }

    /// Validate the journal, then hand off to the executor if it is in sync
    pub async fn run<E, O, W>(&self, executor: &E, out: &mut O, err: &mut W) -> Result<GateOutcome>
    where
        E: MigrationExecutor,
        O: Write,
        W: Write,
    {
        self.run_with(validate_journal_sync, executor, out, err)
            .await
    }

    /// Same as [`MigrationGate::run`] with the validation step supplied by the caller.
    ///
    /// The validator is called at most once, and never when validation is skipped.
    /// The executor is called only after the validator reported a valid result or the
    /// check was skipped.
    pub async fn run_with<V, E, O, W>(
        &self,
        validator: V,
        executor: &E,
        out: &mut O,
        err: &mut W,
    ) -> Result<GateOutcome>
    where
        V: FnOnce(&JournalLayout) -> ValidationResult,
        E: MigrationExecutor,
        O: Write,
        W: Write,
    {
        if self.skip_validation {
            warn!(
                "Journal sync validation bypassed for {}",
                self.layout.migrations_dir().display()
            );
            writeln!(err, "{}", format_bypass_warning())?;
            err.flush()?;

            let exit_code = executor.execute().await?;
            return Ok(GateOutcome::Executed {
                exit_code,
                bypassed: true,
            });
        }

        info!(
            "Validating journal sync in {}",
            self.layout.migrations_dir().display()
        );
        let result = validator(&self.layout);

        if !result.valid {
            write!(err, "{}", format_failure_diagnostic(&result, &self.remediation))?;
            err.flush()?;
            return Ok(GateOutcome::Halted(result));
        }

        writeln!(out, "{}", format_success_line(&result))?;
        out.flush()?;

        let exit_code = executor.execute().await?;
        Ok(GateOutcome::Executed {
            exit_code,
            bypassed: false,
        })
    }
}
