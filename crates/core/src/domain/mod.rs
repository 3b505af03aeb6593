// Domain Layer - Pure entities, no I/O

pub mod execution;

// Re-exports
pub use execution::ExecutionResult;
