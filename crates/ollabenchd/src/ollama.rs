//! Ollama chat client for benchmark runs.
//!
//! One client per request: the benchmark caller supplies the endpoint and
//! model name, so nothing is shared between evaluations. A single failure
//! is terminal for the request; there are no retries.

use ollabench_shared::error::ModelError;
use ollabench_shared::schemas::{
    OllamaChatRequest, OllamaChatResponse, OllamaMessage, ProposedCall, ToolDefinition,
};
use std::time::Duration;
use tracing::{error, info};

/// Upper bound on one model round trip.
pub const MODEL_TIMEOUT_SECS: u64 = 120;

/// What the model came back with: free text plus proposed tool calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub content: String,
    pub tool_calls: Vec<ProposedCall>,
}

#[derive(Debug)]
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client for one benchmark request. Rejects endpoints that are
    /// not absolute http(s) URLs before any traffic happens.
    pub fn new(base_url: &str, model: &str) -> Result<Self, ModelError> {
        Self::with_timeout(base_url, model, Duration::from_secs(MODEL_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let base = base_url.trim().trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ModelError::Initialization(format!(
                "base_url '{base_url}' is not an http(s) endpoint"
            )));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::Initialization(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base.to_string(),
            model: model.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-turn chat with the tool catalogue attached.
    pub async fn chat_with_tools(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tools: Vec<ToolDefinition>,
    ) -> Result<ChatOutcome, ModelError> {
        let url = format!("{}/api/chat", self.base_url);

        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages: vec![
                OllamaMessage::text("system", system_prompt),
                OllamaMessage::text("user", user_prompt),
            ],
            stream: false,
            tools,
        };

        info!("[>]  LLM CALL [{}] at {}", self.model, self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Invocation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("[-]  Ollama error {}: {}", status, error_text);
            return Err(ModelError::Invocation(format!(
                "Ollama returned error {status}: {error_text}"
            )));
        }

        let chat: OllamaChatResponse = response.json().await.map_err(|e| {
            ModelError::Invocation(format!("Failed to parse Ollama response: {e}"))
        })?;

        let content = chat.message.content.trim().to_string();
        let tool_calls: Vec<ProposedCall> = chat
            .message
            .tool_calls
            .into_iter()
            .map(|tc| ProposedCall {
                name: tc.function.name,
                arguments: tc.function.arguments,
            })
            .collect();

        info!(
            "[<]  LLM RESPONSE ({} chars, {} tool calls)",
            content.len(),
            tool_calls.len()
        );

        Ok(ChatOutcome {
            content,
            tool_calls,
        })
    }
}
