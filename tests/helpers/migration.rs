use migsync::journal::JournalLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway migrations directory laid out the way drizzle-kit writes it
pub struct MigrationFixture {
    pub temp_dir: TempDir,
    pub migrations_dir: PathBuf,
}

impl MigrationFixture {
    /// Empty migrations directory named `drizzle/` inside a fresh temp dir
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let migrations_dir = temp_dir.path().join("drizzle");
        fs::create_dir_all(&migrations_dir).expect("Failed to create migrations directory");

        Self {
            temp_dir,
            migrations_dir,
        }
    }

    /// Project root that contains the migrations directory
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn layout(&self) -> JournalLayout {
        JournalLayout::new(&self.migrations_dir)
    }

    pub fn tag(index: usize) -> String {
        format!("{:04}_migration_{}", index + 1, index + 1)
    }

    /// Write `count` migration files named 0001_migration_1.sql, 0002_migration_2.sql, ...
    pub fn with_sql_files(self, count: usize) -> Self {
        for index in 0..count {
            fs::write(
                self.migrations_dir.join(format!("{}.sql", Self::tag(index))),
                format!("CREATE TABLE t{} (id INT);", index),
            )
            .expect("Failed to write migration file");
        }
        self
    }

    /// Write a journal with `count` drizzle-style entries
    pub fn with_journal_entries(self, count: usize) -> Self {
        let entries: Vec<_> = (0..count)
            .map(|index| {
                serde_json::json!({
                    "idx": index,
                    "version": "7",
                    "when": 1_700_000_000_000u64 + index as u64,
                    "tag": Self::tag(index),
                    "breakpoints": true
                })
            })
            .collect();

        let journal = serde_json::json!({
            "version": "7",
            "dialect": "postgresql",
            "entries": entries
        });

        self.with_raw_journal(&serde_json::to_string_pretty(&journal).unwrap())
    }

    pub fn with_raw_journal(self, contents: &str) -> Self {
        let meta_dir = self.migrations_dir.join("meta");
        fs::create_dir_all(&meta_dir).expect("Failed to create meta directory");
        fs::write(meta_dir.join("_journal.json"), contents).expect("Failed to write journal");
        self
    }

    pub fn with_file(self, relative_path: &str, contents: &str) -> Self {
        let path = self.migrations_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, contents).expect("Failed to write file");
        self
    }
}

impl Default for MigrationFixture {
    fn default() -> Self {
        Self::new()
    }
}
