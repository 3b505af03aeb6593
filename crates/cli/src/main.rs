//! Runlet CLI - run one shell command and report exactly what happened
//!
//! This is the invocation boundary: where the original host runtime routed
//! remote calls, a plain binary wires the shell adapter and runs one command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use runlet_core::port::CommandExecutor;
use runlet_infra_shell::shell_executor::DEFAULT_SHELL;
use runlet_infra_shell::{ShellConfig, ShellExecutor, TracingCommandLog};

#[derive(Parser)]
#[command(name = "runlet")]
#[command(about = "Run one shell command, capture everything, report the result", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command line through the system shell
    Run {
        /// Command line to evaluate (may contain pipes, redirection, any shell syntax)
        command: String,

        /// Shell interpreter path
        #[arg(long, env = "RUNLET_SHELL", default_value = DEFAULT_SHELL)]
        shell: String,

        /// Print the full result as a JSON object instead of the raw streams
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            command,
            shell,
            json,
        } => run(&command, &shell, json).await,
    }
}

/// Initialize logging (pretty for development, JSON for production)
fn init_logging() {
    let log_format = std::env::var("RUNLET_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("runlet=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer())
                .init();
        }
    }
}

async fn run(command: &str, shell: &str, json: bool) -> Result<()> {
    let executor = ShellExecutor::new(ShellConfig::new(shell), Arc::new(TracingCommandLog));

    let result = executor
        .execute(command)
        .await
        .with_context(|| format!("failed to launch shell {shell}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.stdout);
        eprint!("{}", result.stderr);
        if !result.success() {
            eprintln!(
                "{}",
                format!("command exited with code {}", result.exit_code).red()
            );
        }
    }

    // Mirror the child's exit status; exit codes are the caller's to interpret
    std::process::exit(exit_status(result.exit_code));
}

/// Map a result's raw exit code to the CLI's own exit status.
///
/// Codes in the normal range pass through. Signal deaths are reported as -N
/// in the result; the CLI translates them to the shell convention 128 + N so
/// a killed command never looks successful to the calling shell.
fn exit_status(exit_code: i32) -> i32 {
    match exit_code {
        code @ 0..=255 => code,
        signal if signal < 0 => 128 - signal.max(-127),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_exit_codes_pass_through() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(7), 7);
        assert_eq!(exit_status(255), 255);
    }

    #[test]
    fn signal_death_exits_nonzero() {
        // SIGTERM is reported as -15 in the result triple
        assert_eq!(exit_status(-15), 143);
        assert_eq!(exit_status(-9), 137);
        assert_ne!(exit_status(-1), 0);
    }
}
