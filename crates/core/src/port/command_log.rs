// Command Log Port
// Injected logging collaborator - no process-wide implicit logger, so the
// executor stays testable in isolation

use crate::domain::ExecutionResult;

/// Diagnostic sink for command lifecycle records.
///
/// Purely observational: nothing in the execution contract depends on what an
/// implementation does with these calls.
pub trait CommandLog: Send + Sync {
    /// Called immediately before the shell is spawned, with the literal
    /// command line.
    fn launching(&self, command: &str);

    /// Called after the child exits, with the decoded streams and exit code.
    fn completed(&self, command: &str, result: &ExecutionResult);
}

/// No-op log for callers that want no diagnostics.
pub struct NullCommandLog;

impl CommandLog for NullCommandLog {
    fn launching(&self, _command: &str) {}
    fn completed(&self, _command: &str, _result: &ExecutionResult) {}
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// A log record captured by [`RecordingLog`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LogRecord {
        Launching { command: String },
        Completed { command: String, exit_code: i32 },
    }

    /// Recording log for tests: captures records behind a mutex so tests can
    /// assert on them without a global subscriber.
    #[derive(Default)]
    pub struct RecordingLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl RecordingLog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn records(&self) -> Vec<LogRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl CommandLog for RecordingLog {
        fn launching(&self, command: &str) {
            self.records.lock().unwrap().push(LogRecord::Launching {
                command: command.to_string(),
            });
        }

        fn completed(&self, command: &str, result: &ExecutionResult) {
            self.records.lock().unwrap().push(LogRecord::Completed {
                command: command.to_string(),
                exit_code: result.exit_code,
            });
        }
    }
}
