//! `migsync validate` end to end

use crate::helpers::cli::CliTestHelper;
use crate::helpers::migration::MigrationFixture;
use anyhow::Result;
use insta::assert_snapshot;
use predicates::prelude::*;

#[test]
fn test_validate_in_sync() -> Result<()> {
    let helper = CliTestHelper::new(
        MigrationFixture::new()
            .with_sql_files(3)
            .with_journal_entries(3),
    )
    .with_config("");

    helper
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout("✅ Journal in sync (3 migrations)\n");

    Ok(())
}

#[test]
fn test_validate_drift_fails_with_diagnostic() -> Result<()> {
    let helper = CliTestHelper::new(
        MigrationFixture::new()
            .with_sql_files(12)
            .with_journal_entries(8),
    )
    .with_config("gate:\n  remediation_command: pnpm db:generate\n");

    helper
        .command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "❌ Migration validation failed:\n   Journal out of sync: 12 SQL files but 8 journal entries\n",
        ))
        .stderr(predicate::str::contains("   SQL files:       12\n"))
        .stderr(predicate::str::contains("   Journal entries: 8\n"))
        .stderr(predicate::str::contains("   pnpm db:generate\n"));

    Ok(())
}

#[test]
fn test_validate_fresh_project_without_config() -> Result<()> {
    // No migsync.yaml; --migrations-dir points at the empty directory
    let helper = CliTestHelper::new(MigrationFixture::new());

    helper
        .command()
        .args(["validate", "--migrations-dir", "drizzle"])
        .assert()
        .success()
        .stdout("✅ No migrations found (fresh database)\n");

    Ok(())
}

#[test]
fn test_validate_migrations_dir_from_env() -> Result<()> {
    let helper = CliTestHelper::new(
        MigrationFixture::new()
            .with_sql_files(2)
            .with_journal_entries(1),
    );

    helper
        .command()
        .env("MIGRATIONS_DIR", "drizzle")
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Journal out of sync: 2 SQL files but 1 journal entries",
        ));

    Ok(())
}

#[test]
fn test_validate_missing_directory() -> Result<()> {
    let helper = CliTestHelper::new(MigrationFixture::new());

    helper
        .command()
        .args(["validate", "--migrations-dir", "does/not/exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to read migrations directory:",
        ))
        .stderr(predicate::str::contains("   SQL files:       0\n"));

    Ok(())
}

#[test]
fn test_validate_verbose_lists_unregistered_files() -> Result<()> {
    let helper = CliTestHelper::new(
        MigrationFixture::new()
            .with_sql_files(3)
            .with_journal_entries(2),
    )
    .with_config("");

    helper
        .command()
        .args(["validate", "--verbose"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "🔍 Not registered in the journal:\n   - 0003_migration_3.sql\n",
        ));

    Ok(())
}

#[test]
fn test_validate_json_output() -> Result<()> {
    let helper = CliTestHelper::new(
        MigrationFixture::new()
            .with_sql_files(3)
            .with_journal_entries(2)
            .with_file("hotfix.sql", "-- manual"),
    )
    .with_config("");

    let output = helper
        .command()
        .args(["validate", "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    assert_snapshot!(String::from_utf8(output)?, @r#"
    {
      "status": "out_of_sync",
      "exit_code": 1,
      "valid": false,
      "message": "Journal out of sync: 4 SQL files but 2 journal entries",
      "sql_count": 4,
      "journal_count": 2,
      "unversioned": [
        "hotfix.sql"
      ],
      "unregistered": [
        "0003_migration_3.sql",
        "hotfix.sql"
      ],
      "orphaned": []
    }
    "#);

    Ok(())
}
