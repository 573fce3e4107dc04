use crate::journal::{JournalLayout, discover_migration_files, read_journal};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Which files and journal entries fail to pair up by name.
///
/// Purely informational: sync status is decided by counts alone, so a report can be
/// non-empty for a valid result (renamed file) or empty for an invalid one (untagged
/// journal entries).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    /// Migration files not following the `NNNN_slug.sql` convention
    pub unversioned: Vec<String>,
    /// Migration files with no journal entry tagged with their name
    pub unregistered: Vec<String>,
    /// Journal tags with no matching migration file
    pub orphaned: Vec<String>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.unversioned.is_empty() && self.unregistered.is_empty() && self.orphaned.is_empty()
    }
}

/// Pair migration files with journal entries by tag.
///
/// A missing or unreadable journal is read as one with no entries, which reports
/// every file as unregistered.
pub fn drift_report(layout: &JournalLayout) -> Result<DriftReport> {
    let migrations = discover_migration_files(layout).with_context(|| {
        format!(
            "Failed to read migrations directory: {}",
            layout.migrations_dir().display()
        )
    })?;

    let journal = match read_journal(&layout.journal_path()) {
        Ok(journal) => journal,
        Err(e) => {
            debug!("Journal unavailable for drift report: {}", e);
            Default::default()
        }
    };

    let tags: HashSet<&str> = journal.tags().collect();
    let stems: HashSet<&str> = migrations.stems().collect();

    let unregistered = migrations
        .files
        .iter()
        .zip(migrations.stems())
        .filter(|(_, stem)| !tags.contains(stem))
        .map(|(file, _)| file.clone())
        .collect();

    let orphaned = journal
        .tags()
        .filter(|tag| !stems.contains(tag))
        .map(str::to_string)
        .collect();

    Ok(DriftReport {
        unversioned: migrations.unversioned(),
        unregistered,
        orphaned,
    })
}
