use anyhow::{Context, Result, bail};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Applies migrations once the gate lets the run through
pub trait MigrationExecutor {
    /// Run migrations and report the exit code to pass through to the caller
    fn execute(&self) -> impl Future<Output = Result<i32>>;
}

/// Hands off to an external migration command (`npx drizzle-kit migrate`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExecutor {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandExecutor {
    /// Build from a command line split into program and arguments
    pub fn from_command_line(command: &[String], working_dir: &Path) -> Result<Self> {
        let Some((program, args)) = command.split_first() else {
            bail!(
                "No migration command configured.\n\n\
                 Set one in migsync.yaml:\n\n\
                 gate:\n  command: [\"npx\", \"drizzle-kit\", \"migrate\"]\n\n\
                 or pass it after `--`: migsync migrate -- npx drizzle-kit migrate"
            );
        };

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir: working_dir.to_path_buf(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl MigrationExecutor for CommandExecutor {
    async fn execute(&self) -> Result<i32> {
        info!("Running migrations: {}", self.command_line());
        debug!("Working directory: {}", self.working_dir.display());

        // Dropping this future (shutdown signal) kills the child instead of orphaning it
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| {
                format!("Failed to start migration command: {}", self.command_line())
            })?;

        let status = child.wait().await.with_context(|| {
            format!("Failed waiting on migration command: {}", self.command_line())
        })?;

        // Terminated by a signal when there is no code
        let code = status.code().unwrap_or(1);
        debug!("Migration command exited with {}", code);
        Ok(code)
    }
}
