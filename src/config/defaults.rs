use crate::config::types::*;
use crate::constants::{JOURNAL_FILENAME, META_DIR, MIGRATION_EXTENSION};

impl Default for Directories {
    fn default() -> Self {
        Self {
            migrations: "drizzle".to_string(),
        }
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            meta_dir: META_DIR.to_string(),
            journal_file: JOURNAL_FILENAME.to_string(),
            extension: MIGRATION_EXTENSION.to_string(),
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            command: vec![
                "npx".to_string(),
                "drizzle-kit".to_string(),
                "migrate".to_string(),
            ],
            remediation_command: "npx drizzle-kit generate".to_string(),
            bypass_command: "migsync migrate --skip-validation".to_string(),
        }
    }
}
