// Runlet Core - Domain Logic & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod domain;
pub mod port;

pub use domain::ExecutionResult;
pub use port::{CommandExecutor, CommandLog, LaunchError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
