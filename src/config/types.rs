use clap::Args;
use serde::{Deserialize, Serialize};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub directories: Option<DirectoriesInput>,
    pub journal: Option<JournalInput>,
    pub gate: Option<GateInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub directories: Directories,
    pub journal: Journal,
    pub gate: Gate,
}

// Directory configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoriesInput {
    pub migrations_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Directories {
    pub migrations: String,
}

// Journal layout configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JournalInput {
    pub meta_dir: Option<String>,
    pub journal_file: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Journal {
    pub meta_dir: String,
    pub journal_file: String,
    pub extension: String,
}

// Gate configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GateInput {
    /// Migration command the gate hands off to, split into program and arguments
    pub command: Option<Vec<String>>,
    pub remediation_command: Option<String>,
    pub bypass_command: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gate {
    pub command: Vec<String>,
    pub remediation_command: String,
    pub bypass_command: String,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct DirectoryArgs {
    #[arg(long, help = "Migrations directory path")]
    pub migrations_dir: Option<String>,
}

// Conversion functions from CLI args to config input
impl From<DirectoryArgs> for DirectoriesInput {
    fn from(args: DirectoryArgs) -> Self {
        Self {
            migrations_dir: args.migrations_dir,
        }
    }
}
