// Runlet Infrastructure - Shell Adapters
// Implements: CommandExecutor, CommandLog

pub mod shell_executor;
pub mod tracing_log;

pub use shell_executor::{ShellConfig, ShellExecutor};
pub use tracing_log::TracingCommandLog;
