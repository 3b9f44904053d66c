//! Shared types and pure logic for the ollabench harness.
//!
//! Everything in this crate is deterministic and free of I/O: the wire
//! schemas, the prompt templates, the error taxonomy, and the verdict
//! evaluator that scores a model's tool-calling behavior.

pub mod error;
pub mod prompt;
pub mod schemas;
pub mod verdict;

pub use error::{ModelError, ToolError};
pub use schemas::{
    BenchmarkRequest, BenchmarkResponse, FunctionDefinition, HealthResponse, OllamaChatRequest,
    OllamaChatResponse, OllamaFunctionCall, OllamaMessage, OllamaToolCall, ProposedCall,
    ToolCallRecord, ToolDefinition,
};
pub use verdict::{
    evaluate, AttemptOutcome, EvaluationVerdict, Expectation, ToolCallAttempt, ToolExecutor,
};
