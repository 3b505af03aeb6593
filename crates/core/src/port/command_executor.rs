// Command Executor Port
// Abstraction for running one command line through a system shell

use crate::domain::ExecutionResult;
use async_trait::async_trait;
use thiserror::Error;

/// Launch-level failures: the shell interpreter itself could not be started
/// or its output could not be collected.
///
/// A command that runs and exits non-zero is NOT a `LaunchError` - that is a
/// normal [`ExecutionResult`] with `exit_code != 0`.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("shell not found: {shell}")]
    ShellNotFound { shell: String },

    #[error("failed to spawn shell {shell}: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect output from {shell}: {source}")]
    Io {
        shell: String,
        #[source]
        source: std::io::Error,
    },
}

/// Command Executor trait
///
/// Implementations:
/// - ShellExecutor (runlet-infra-shell): spawns `{shell} -c {command}`
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run one command line to completion and report exactly what happened.
    ///
    /// The input is an arbitrary string handed verbatim to the shell's
    /// run-a-command-string mode: pipes, redirection, and any other shell
    /// syntax pass through unsanitized and unrestricted. The call resolves
    /// only after the child exits; output is captured in full, untruncated.
    ///
    /// No timeout, no cancellation, no retry. A caller wanting a deadline
    /// must impose it externally.
    ///
    /// # Errors
    /// - `LaunchError::ShellNotFound` if the shell binary does not exist
    /// - `LaunchError::Spawn` if it exists but cannot be invoked
    /// - `LaunchError::Io` if the child's output cannot be collected
    async fn execute(&self, command: &str) -> Result<ExecutionResult, LaunchError>;
}
