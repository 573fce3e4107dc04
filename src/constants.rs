// Migration file layout conventions
pub const MIGRATION_EXTENSION: &str = "sql";
pub const META_DIR: &str = "meta";
pub const JOURNAL_FILENAME: &str = "_journal.json";

// Minimum width of the zero-padded sequence prefix in "0001_create_users.sql"
pub const MIGRATION_SEQUENCE_WIDTH: usize = 4;

// Configuration file name
pub const CONFIG_FILENAME: &str = "migsync.yaml";

// Environment variable that overrides the configured migrations directory
pub const MIGRATIONS_DIR_ENV: &str = "MIGRATIONS_DIR";

// CLI flag that bypasses the gate; echoed verbatim in the bypass warning
pub const SKIP_VALIDATION_FLAG: &str = "--skip-validation";

// Exit codes when interrupted, following the shell's 128 + signal number convention
pub const SIGINT_EXIT_CODE: i32 = 128 + 2;
pub const SIGTERM_EXIT_CODE: i32 = 128 + 15;
