// Execution Result Domain Model

use serde::{Deserialize, Serialize};

/// Outcome of one command invocation.
///
/// Always fully populated: a call either yields the complete triple or fails
/// with a [`crate::port::LaunchError`] before any result exists. A non-zero
/// `exit_code` is data, not an error - interpreting it is the caller's job.
///
/// Created fresh per invocation; never persisted or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Everything the command wrote to stdout, decoded leniently
    /// (invalid byte sequences are substituted, never an error).
    pub stdout: String,

    /// Everything the command wrote to stderr, same lenient decoding.
    pub stderr: String,

    /// Raw process termination code. 0 conventionally means success.
    /// On Unix, termination by signal N is reported as -N.
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Conventional success check (`exit_code == 0`). Provided for callers;
    /// the execution service itself never interprets exit codes.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
