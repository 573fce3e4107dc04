use crate::constants::MIGRATION_SEQUENCE_WIDTH;
use crate::journal::JournalLayout;
use itertools::Itertools;
use std::io;

/// Migration files found directly inside a migrations directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSet {
    /// File names sorted lexically, which is sequence order for zero-padded prefixes
    pub files: Vec<String>,
    extension: String,
}

impl MigrationSet {
    pub fn sql_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files that count as migrations but do not follow the `NNNN_slug.sql` convention
    pub fn unversioned(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| !is_versioned_migration(f, &self.extension))
            .cloned()
            .collect()
    }

    /// File names with the migration extension removed ("0001_create_users")
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        let suffix = format!(".{}", self.extension);
        self.files
            .iter()
            .map(move |f| f.strip_suffix(suffix.as_str()).unwrap_or(f))
    }
}

/// Check a file name against the versioned migration convention: a zero-padded
/// numeric sequence of at least four digits, an underscore, then a non-empty slug.
pub fn is_versioned_migration(filename: &str, extension: &str) -> bool {
    let Some(name) = filename
        .strip_suffix(extension)
        .and_then(|n| n.strip_suffix('.'))
    else {
        return false;
    };

    let Some((sequence, slug)) = name.split_once('_') else {
        return false;
    };

    sequence.len() >= MIGRATION_SEQUENCE_WIDTH
        && sequence.chars().all(|c| c.is_ascii_digit())
        && !slug.is_empty()
}

/// List the migration files that are direct children of the migrations directory.
///
/// Only regular files with the migration extension count. The reserved meta
/// directory, and any other subdirectory, is skipped even when its name carries the
/// extension. Errors reading the directory itself are returned untouched so callers
/// can surface the OS-level cause.
pub fn discover_migration_files(layout: &JournalLayout) -> io::Result<MigrationSet> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(layout.migrations_dir())? {
        let entry = entry?;
        let path = entry.path();
        let filename = entry.file_name().to_string_lossy().into_owned();

        if filename == layout.meta_dir || !path.is_file() {
            continue;
        }

        if has_extension(&filename, &layout.extension) {
            files.push(filename);
        }
    }

    Ok(MigrationSet {
        files: files.into_iter().sorted().collect(),
        extension: layout.extension.clone(),
    })
}

/// Suffix match on the name, so a dotfile named `.sql` still counts
fn has_extension(filename: &str, extension: &str) -> bool {
    filename
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}
