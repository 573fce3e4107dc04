//! Journal sync validation.
//!
//! A migrations directory holds versioned SQL files (`0001_create_users.sql`) next to a
//! reserved `meta/` subdirectory whose `_journal.json` records every generated migration.
//! When the two drift apart the migration runner silently skips files, so everything here
//! is read-only and cheap enough to run from a pre-commit hook, in CI and again right
//! before migrations are applied.

pub mod discovery;
pub mod drift;
pub mod manifest;
pub mod validator;

pub use discovery::{MigrationSet, discover_migration_files, is_versioned_migration};
pub use drift::{DriftReport, drift_report};
pub use manifest::{Journal, JournalError, parse_journal, read_journal};
pub use validator::{ValidationResult, validate_journal_sync};

use crate::constants::{JOURNAL_FILENAME, META_DIR, MIGRATION_EXTENSION};
use std::path::{Path, PathBuf};

/// Where a project keeps its migrations and journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLayout {
    pub migrations_dir: PathBuf,
    /// File extension (without the dot) that marks a migration file
    pub extension: String,
    /// Reserved subdirectory holding the journal; never counted as a migration
    pub meta_dir: String,
    pub journal_file: String,
}

impl JournalLayout {
    /// Layout with the conventional `meta/_journal.json` journal and `.sql` migrations
    pub fn new(migrations_dir: impl Into<PathBuf>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
            extension: MIGRATION_EXTENSION.to_string(),
            meta_dir: META_DIR.to_string(),
            journal_file: JOURNAL_FILENAME.to_string(),
        }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.migrations_dir
            .join(&self.meta_dir)
            .join(&self.journal_file)
    }

    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }
}
