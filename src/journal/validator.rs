use crate::journal::{JournalLayout, discover_migration_files, read_journal};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, warn};

/// Outcome of comparing migration files against journal entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub sql_count: usize,
    pub journal_count: usize,
}

impl ValidationResult {
    fn fresh() -> Self {
        Self {
            valid: true,
            message: "No migrations found (fresh database)".to_string(),
            sql_count: 0,
            journal_count: 0,
        }
    }

    fn directory_unreadable(err: impl Display) -> Self {
        Self {
            valid: false,
            message: format!("Failed to read migrations directory: {}", err),
            sql_count: 0,
            journal_count: 0,
        }
    }

    fn journal_unreadable(sql_count: usize, err: impl Display) -> Self {
        Self {
            valid: false,
            message: format!("Failed to read journal file: {}", err),
            sql_count,
            journal_count: 0,
        }
    }

    fn compare(sql_count: usize, journal_count: usize) -> Self {
        if sql_count != journal_count {
            return Self {
                valid: false,
                message: format!(
                    "Journal out of sync: {} SQL files but {} journal entries",
                    sql_count, journal_count
                ),
                sql_count,
                journal_count,
            };
        }

        if sql_count == 0 {
            return Self::fresh();
        }

        Self {
            valid: true,
            message: format!("Journal in sync ({} migrations)", sql_count),
            sql_count,
            journal_count,
        }
    }
}

/// Check that every migration file in the directory is registered in the journal.
///
/// Only counts are compared. Every expected failure (unreadable directory, unreadable
/// or malformed journal, count mismatch) comes back as an invalid result, never as an
/// error. A project with no migration files and no journal is valid.
pub fn validate_journal_sync(layout: &JournalLayout) -> ValidationResult {
    let migrations = match discover_migration_files(layout) {
        Ok(migrations) => migrations,
        Err(e) => {
            debug!(
                "Cannot list migrations directory {}: {}",
                layout.migrations_dir().display(),
                e
            );
            return ValidationResult::directory_unreadable(e);
        }
    };

    for file in migrations.unversioned() {
        warn!(
            "Migration file {} does not follow the NNNN_name.{} naming convention",
            file, layout.extension
        );
    }

    let sql_count = migrations.sql_count();
    let journal_path = layout.journal_path();

    let journal = match read_journal(&journal_path) {
        Ok(journal) => journal,
        Err(e) if sql_count == 0 => {
            debug!(
                "No migrations and no usable journal at {} ({}), treating as fresh",
                journal_path.display(),
                e
            );
            return ValidationResult::fresh();
        }
        Err(e) => return ValidationResult::journal_unreadable(sql_count, e),
    };

    debug!(
        "Found {} migration files and {} journal entries",
        sql_count,
        journal.len()
    );

    ValidationResult::compare(sql_count, journal.len())
}
