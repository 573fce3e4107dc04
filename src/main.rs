use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use migsync::commands::{self, MigrateOptions};
use migsync::config;
use migsync::constants::{CONFIG_FILENAME, SIGINT_EXIT_CODE, SIGTERM_EXIT_CODE};
use migsync::validation_output::{OutputFormat, ValidationOutputOptions};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct MigrateArgs {
    /// Skip journal sync validation (emergency only)
    #[arg(long)]
    skip_validation: bool,

    #[command(flatten)]
    directory_args: config::DirectoryArgs,

    /// Migration command to run instead of the configured one
    #[arg(last = true)]
    command: Vec<String>,
}

#[derive(Parser)]
struct ValidateArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,

    #[command(flatten)]
    directory_args: config::DirectoryArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the migration journal, then run migrations
    Migrate(MigrateArgs),

    /// Check that SQL migration files and the journal are in sync (for CI and hooks)
    Validate(ValidateArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: Option<commands::config::ConfigCommands>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);

    let exit_code = tokio::select! {
        result = run_main(cli) => result?,
        code = wait_for_shutdown_signal() => {
            info!("Received shutdown signal, exiting with {}", code);
            code
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Resolves with the exit code for the signal received (128 + signal number)
async fn wait_for_shutdown_signal() -> i32 {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => SIGINT_EXIT_CODE,
        _ = terminate => SIGTERM_EXIT_CODE,
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    // stdout is reserved for command output (JSON in CI)
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the selected command and return the process exit code
async fn run_main(cli: Cli) -> Result<i32> {
    let (file_config, root_dir) = config::load_config(&cli.config_file)?;

    match cli.command {
        Commands::Migrate(args) => {
            let cli_config = config::ConfigInput {
                directories: Some(args.directory_args.into()),
                journal: None,
                gate: None,
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            let options = MigrateOptions {
                skip_validation: args.skip_validation,
                command: args.command,
            };

            info!("Running gated migrations");
            let outcome = commands::cmd_migrate(&config, &root_dir, &options).await?;
            Ok(outcome.exit_code())
        }
        Commands::Validate(args) => {
            let cli_config = config::ConfigInput {
                directories: Some(args.directory_args.into()),
                journal: None,
                gate: None,
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            let options = ValidationOutputOptions {
                format: args.format,
                verbose: cli.verbose || cli.debug,
            };

            info!("Validating journal sync");
            let in_sync = commands::cmd_validate(&config, &root_dir, &options).await?;
            Ok(if in_sync { 0 } else { 1 })
        }
        Commands::Config { command } => {
            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .resolve()?;

            commands::cmd_config(&config, &cli.config_file, command).await?;
            Ok(0)
        }
    }
}
