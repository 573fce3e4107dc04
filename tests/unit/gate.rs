//! Gate ordering: the executor only runs after a passing check or an explicit bypass.

use crate::helpers::migration::MigrationFixture;
use anyhow::Result;
use migsync::gate::{GateOutcome, MigrationExecutor, MigrationGate};
use migsync::journal::{JournalLayout, ValidationResult};
use migsync::validation_output::Remediation;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct RecordingExecutor {
    runs: AtomicUsize,
}

impl RecordingExecutor {
    fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl MigrationExecutor for RecordingExecutor {
    async fn execute(&self) -> Result<i32> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }
}

fn remediation() -> Remediation {
    Remediation {
        fix_command: "npx drizzle-kit generate".to_string(),
        bypass_command: "migsync migrate --skip-validation".to_string(),
    }
}

#[tokio::test]
async fn test_bypass_skips_validator_and_runs_executor() -> Result<()> {
    let fixture = MigrationFixture::new()
        .with_sql_files(12)
        .with_journal_entries(8);
    let executor = RecordingExecutor::default();
    let validator_calls = AtomicUsize::new(0);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = MigrationGate::new(fixture.layout(), remediation())
        .skip_validation(true)
        .run_with(
            |layout: &JournalLayout| -> ValidationResult {
                validator_calls.fetch_add(1, Ordering::SeqCst);
                migsync::journal::validate_journal_sync(layout)
            },
            &executor,
            &mut out,
            &mut err,
        )
        .await?;

    assert_eq!(
        outcome,
        GateOutcome::Executed {
            exit_code: 0,
            bypassed: true
        }
    );
    assert_eq!(validator_calls.load(Ordering::SeqCst), 0);
    assert_eq!(executor.runs(), 1);
    assert!(
        String::from_utf8(err)?
            .contains("⚠️  WARNING: Skipping journal sync validation (--skip-validation flag)")
    );

    Ok(())
}

#[tokio::test]
async fn test_drift_halts_before_executor() -> Result<()> {
    let fixture = MigrationFixture::new()
        .with_sql_files(12)
        .with_journal_entries(8);
    let executor = RecordingExecutor::default();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = MigrationGate::new(fixture.layout(), remediation())
        .run(&executor, &mut out, &mut err)
        .await?;

    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(executor.runs(), 0);
    assert!(out.is_empty());

    let expected = "\
❌ Migration validation failed:
   Journal out of sync: 12 SQL files but 8 journal entries

Details:
   SQL files:       12
   Journal entries: 8

This usually means migration files were created but not registered.
To fix this, run:

   npx drizzle-kit generate

If you need to bypass this check (emergency only), use:
   migsync migrate --skip-validation
";
    assert_eq!(String::from_utf8(err)?, expected);

    Ok(())
}

#[tokio::test]
async fn test_in_sync_confirms_and_runs_executor() -> Result<()> {
    let fixture = MigrationFixture::new()
        .with_sql_files(3)
        .with_journal_entries(3);
    let executor = RecordingExecutor::default();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = MigrationGate::new(fixture.layout(), remediation())
        .run(&executor, &mut out, &mut err)
        .await?;

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(executor.runs(), 1);
    assert_eq!(String::from_utf8(out)?, "✅ Journal in sync (3 migrations)\n");
    assert!(err.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_unreadable_directory_halts() -> Result<()> {
    let fixture = MigrationFixture::new();
    let executor = RecordingExecutor::default();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = MigrationGate::new(
        JournalLayout::new(fixture.root().join("missing")),
        remediation(),
    )
    .run(&executor, &mut out, &mut err)
    .await?;

    assert!(matches!(outcome, GateOutcome::Halted(_)));
    assert_eq!(executor.runs(), 0);
    assert!(String::from_utf8(err)?.contains("Failed to read migrations directory:"));

    Ok(())
}
