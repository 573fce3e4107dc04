use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            directories: match (self.directories, other.directories) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
            journal: match (self.journal, other.journal) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
            gate: match (self.gate, other.gate) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
        }
    }
}

// Field-wise merges: values set in `other` win
impl DirectoriesInput {
    pub fn merge_with(self, other: DirectoriesInput) -> DirectoriesInput {
        DirectoriesInput {
            migrations_dir: self.migrations_dir.merge(other.migrations_dir),
        }
    }
}

impl JournalInput {
    pub fn merge_with(self, other: JournalInput) -> JournalInput {
        JournalInput {
            meta_dir: self.meta_dir.merge(other.meta_dir),
            journal_file: self.journal_file.merge(other.journal_file),
            extension: self.extension.merge(other.extension),
        }
    }
}

impl GateInput {
    pub fn merge_with(self, other: GateInput) -> GateInput {
        GateInput {
            command: self.command.merge(other.command),
            remediation_command: self.remediation_command.merge(other.remediation_command),
            bypass_command: self.bypass_command.merge(other.bypass_command),
        }
    }
}
