//! Fixed mapping from tool name to implementation.
//!
//! Unknown names are a typed error. The empty/"none" sentinel never reaches
//! the registry - the evaluator resolves it to a no-op first.

use crate::tools::{time, weather};
use async_trait::async_trait;
use ollabench_shared::error::ToolError;
use ollabench_shared::schemas::{FunctionDefinition, ToolDefinition};
use ollabench_shared::verdict::ToolExecutor;
use serde_json::{json, Value};
use tracing::info;

pub const WEATHER_TOOL: &str = "get_current_weather";
pub const TIME_TOOL: &str = "get_system_time";

/// Registry of the two benchmark tools.
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn tool_names(&self) -> Vec<String> {
        vec![WEATHER_TOOL.to_string(), TIME_TOOL.to_string()]
    }

    /// Catalogue sent to the model alongside the prompt. Wording is fixed
    /// at compile time; nothing here changes at runtime.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                kind: "function".to_string(),
                function: FunctionDefinition {
                    name: WEATHER_TOOL.to_string(),
                    description: "Get the current weather for a location.".to_string(),
                    parameters: json!({
                        "type": "object",
                        "properties": {
                            "location": {
                                "type": "string",
                                "description": "City and state, e.g. 'Seattle, WA'"
                            }
                        },
                        "required": ["location"]
                    }),
                },
            },
            ToolDefinition {
                kind: "function".to_string(),
                function: FunctionDefinition {
                    name: TIME_TOOL.to_string(),
                    description: "Get the current system date and time.".to_string(),
                    parameters: json!({
                        "type": "object",
                        "properties": {
                            "format": {
                                "type": "string",
                                "description": "Optional strftime format, \
                                                defaults to %Y-%m-%d %H:%M:%S"
                            }
                        }
                    }),
                },
            },
        ]
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    async fn execute(&self, name: &str, arguments: &Value) -> Result<String, ToolError> {
        let normalized = name.trim().to_ascii_lowercase();
        info!("  Executing tool: {}", normalized);

        match normalized.as_str() {
            WEATHER_TOOL => weather::current_weather(arguments).await,
            TIME_TOOL => time::system_time(arguments),
            _ => Err(ToolError::UnknownTool(name.trim().to_string())),
        }
    }
}
