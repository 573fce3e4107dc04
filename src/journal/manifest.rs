use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Why a journal could not be used
///
/// The display text is the underlying cause only, so it can be embedded verbatim in
/// "Failed to read journal file: ..." messages.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("journal must be a JSON object with an `entries` array, found {0}")]
    Shape(&'static str),
}

/// The migration journal written by the migration tooling.
///
/// Entries are kept opaque; only how many there are decides sync status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Journal {
    pub entries: Vec<Value>,
}

impl Journal {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Migration tags of entries that carry one (`{"tag": "0001_create_users", ...}`)
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.get("tag").and_then(Value::as_str))
    }
}

/// Parse journal contents, requiring a top-level object with an `entries` array.
///
/// `{}` and `{"entries": null}` are rejected rather than read as an empty journal.
pub fn parse_journal(contents: &str) -> Result<Journal, JournalError> {
    let value: Value = serde_json::from_str(contents)?;

    let kind = match &value {
        Value::Object(_) => None,
        Value::Array(_) => Some("an array"),
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
    };
    if let Some(kind) = kind {
        return Err(JournalError::Shape(kind));
    }

    Ok(serde_json::from_value(value)?)
}

pub fn read_journal(path: &Path) -> Result<Journal, JournalError> {
    let contents = std::fs::read_to_string(path)?;
    parse_journal(&contents)
}
