//! Error types for the benchmark harness.

use thiserror::Error;

/// Failure raised by a tool implementation or the registry.
///
/// Tool failures are typed rather than smuggled through output strings;
/// the wire rendering (see `verdict::AttemptOutcome`) is derived from this,
/// never the other way around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("{0}")]
    Execution(String),
}

/// Terminal failures from the model client.
///
/// Both variants abort the request before any verdict is computed.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to initialize model: {0}")]
    Initialization(String),

    #[error("Model invocation failed: {0}")]
    Invocation(String),
}
