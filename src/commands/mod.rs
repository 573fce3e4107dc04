pub mod config;
pub mod migrate;
pub mod validate;

// Re-export all command functions
pub use config::cmd_config;
pub use migrate::{MigrateOptions, cmd_migrate};
pub use validate::cmd_validate;
