// Tracing-backed CommandLog
// The default diagnostic collaborator wired by the CLI

use tracing::info;

use runlet_core::domain::ExecutionResult;
use runlet_core::port::CommandLog;

/// Emits command lifecycle records through the `tracing` macros.
pub struct TracingCommandLog;

impl CommandLog for TracingCommandLog {
    fn launching(&self, command: &str) {
        info!(command = %command, "Running command");
    }

    fn completed(&self, command: &str, result: &ExecutionResult) {
        info!(
            command = %command,
            exit_code = %result.exit_code,
            stdout = %result.stdout,
            stderr = %result.stderr,
            "Command completed"
        );
    }
}
