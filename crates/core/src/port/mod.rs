// Port Layer - Interfaces for external dependencies

pub mod command_executor;
pub mod command_log;

// Re-exports
pub use command_executor::{CommandExecutor, LaunchError};
pub use command_log::{CommandLog, NullCommandLog};
