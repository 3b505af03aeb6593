// Shell executor implementation
// reason: async-trait, tokio for async process management

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

use runlet_core::domain::ExecutionResult;
use runlet_core::port::{CommandExecutor, CommandLog, LaunchError};

/// Default interpreter path. The original deployment target hardcoded bash;
/// `/bin` is the portable merged-usr spelling.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Shell adapter configuration: where the interpreter lives.
///
/// The command string is always passed as the single argument to the shell's
/// `-c` run-a-command-string mode.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub shell_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell_path: PathBuf::from(DEFAULT_SHELL),
        }
    }
}

impl ShellConfig {
    pub fn new(shell_path: impl Into<PathBuf>) -> Self {
        Self {
            shell_path: shell_path.into(),
        }
    }
}

/// Shell executor: spawns `{shell} -c {command}` and captures everything.
///
/// Holds no mutable state. Concurrent `execute` calls are independent, one
/// child process each, no coordination between them.
pub struct ShellExecutor {
    config: ShellConfig,
    log: Arc<dyn CommandLog>,
}

impl ShellExecutor {
    /// Create a new shell executor.
    ///
    /// # Arguments
    /// * `config` - Interpreter location
    /// * `log` - Injected diagnostic collaborator (see `CommandLog`)
    pub fn new(config: ShellConfig, log: Arc<dyn CommandLog>) -> Self {
        Self { config, log }
    }

    fn shell_name(&self) -> String {
        self.config.shell_path.display().to_string()
    }

    /// Spawn the shell and wait for all output.
    ///
    /// Spawn failures are launch-level errors; once the child is running, the
    /// only remaining failure mode is losing its output streams.
    async fn spawn_and_wait(&self, command: &str) -> Result<std::process::Output, LaunchError> {
        let child = Command::new(&self.config.shell_path)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => LaunchError::ShellNotFound {
                    shell: self.shell_name(),
                },
                _ => LaunchError::Spawn {
                    shell: self.shell_name(),
                    source: e,
                },
            })?;

        if let Some(pid) = child.id() {
            debug!(pid = %pid, shell = %self.shell_name(), "Shell spawned");
        }

        child
            .wait_with_output()
            .await
            .map_err(|e| LaunchError::Io {
                shell: self.shell_name(),
                source: e,
            })
    }

    /// Build the result triple from raw process output.
    fn build_result(output: std::process::Output) -> ExecutionResult {
        ExecutionResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code(output.status),
        }
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> Result<ExecutionResult, LaunchError> {
        self.log.launching(command);

        let output = self.spawn_and_wait(command).await?;
        let result = Self::build_result(output);

        self.log.completed(command, &result);

        Ok(result)
    }
}

/// Map a termination status to the raw exit code. Signal deaths on Unix are
/// reported as the negative signal number, matching the convention of the
/// runtime this service was extracted from.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlet_core::port::command_log::mocks::{LogRecord, RecordingLog};
    use runlet_core::port::NullCommandLog;

    fn executor() -> ShellExecutor {
        ShellExecutor::new(ShellConfig::default(), Arc::new(NullCommandLog))
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let result = executor().execute("echo hello").await.unwrap();

        assert_eq!(result.stdout, "hello\n");
        assert_eq!(result.stderr, "");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_data_not_error() {
        let result = executor().execute("exit 42").await.unwrap();

        assert_eq!(result.exit_code, 42);
        assert!(!result.success());
    }

    #[tokio::test]
    async fn test_missing_shell_is_launch_error() {
        let executor = ShellExecutor::new(
            ShellConfig::new("/nonexistent/shell"),
            Arc::new(NullCommandLog),
        );

        let err = executor.execute("echo hello").await.unwrap_err();

        assert!(matches!(err, LaunchError::ShellNotFound { .. }));
    }

    #[tokio::test]
    async fn test_log_collaborator_sees_lifecycle() {
        let log = Arc::new(RecordingLog::new());
        let executor = ShellExecutor::new(ShellConfig::default(), log.clone());

        executor.execute("exit 3").await.unwrap();

        assert_eq!(
            log.records(),
            vec![
                LogRecord::Launching {
                    command: "exit 3".to_string()
                },
                LogRecord::Completed {
                    command: "exit 3".to_string(),
                    exit_code: 3
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_decodes_lossily() {
        // \xff is never valid UTF-8; decoding must degrade, not fail
        let result = executor().execute("printf '\\xffok'").await.unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.ends_with("ok"));
        assert!(result.stdout.contains('\u{FFFD}'));
    }
}
