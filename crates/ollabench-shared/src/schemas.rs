//! Wire schemas for the benchmark API and the Ollama chat protocol subset
//! the harness uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Benchmark API
// ============================================================================

/// Body of `POST /benchmark`.
///
/// All three required fields default to empty so missing keys reach the
/// handler's own validation instead of dying in the JSON extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub sentence: String,
    /// Ground truth: a tool name, the sentinel `"none"`, or absent.
    #[serde(default)]
    pub expected_tool: Option<String>,
}

/// One tool-call attempt as the UI sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRecord {
    pub name: String,
    pub args: Value,
    pub output: String,
}

/// Reply for `POST /benchmark`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResponse {
    pub success: bool,
    pub sentence: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCallRecord>,
    #[serde(default)]
    pub model_response: String,
    /// Wall-clock milliseconds for the whole evaluation.
    pub time_taken: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reply for `GET /v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub tools_available: usize,
    pub tool_names: Vec<String>,
}

// ============================================================================
// Ollama chat protocol
// ============================================================================

/// Ollama `/api/chat` request with the tool catalogue attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    #[serde(default)]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
}

/// Ollama chat message. `tool_calls` only appears on assistant replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<OllamaToolCall>,
}

impl OllamaMessage {
    pub fn text(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
            tool_calls: Vec::new(),
        }
    }
}

/// One tool call proposed by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaToolCall {
    pub function: OllamaFunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaFunctionCall {
    pub name: String,
    /// Ollama sends arguments as a JSON object, not a string.
    #[serde(default)]
    pub arguments: Value,
}

/// Ollama chat response (non-streaming).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaChatResponse {
    #[serde(default)]
    pub model: String,
    pub message: OllamaMessage,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
}

/// OpenAI-style function definition as accepted by Ollama's `tools` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

// ============================================================================
// Evaluator input
// ============================================================================

/// A model-proposed tool invocation, decoupled from the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ProposedCall {
    pub fn new(name: &str, arguments: Value) -> Self {
        Self {
            name: name.to_string(),
            arguments,
        }
    }
}
