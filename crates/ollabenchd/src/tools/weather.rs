//! Weather lookup tool backed by wttr.in.

use ollabench_shared::error::ToolError;
use serde_json::Value;
use std::time::Duration;

const WTTR_URL: &str = "https://wttr.in";

/// Upper bound on the weather lookup round trip.
const WEATHER_TIMEOUT_SECS: u64 = 10;

/// Fetch a one-line current-conditions report for the `location` argument.
pub async fn current_weather(arguments: &Value) -> Result<String, ToolError> {
    let location = arguments
        .get("location")
        .and_then(|l| l.as_str())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ToolError::Execution("missing required argument 'location'".to_string()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(WEATHER_TIMEOUT_SECS))
        .build()
        .map_err(|e| ToolError::Execution(e.to_string()))?;

    // format=3 gives a single "<location>: <conditions> <temp>" line.
    let url = format!("{}/{}?format=3", WTTR_URL, encode_location(location));
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ToolError::Execution(format!("weather lookup failed: {e}")))?;

    if !response.status().is_success() {
        return Err(ToolError::Execution(format!(
            "weather service returned {}",
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ToolError::Execution(e.to_string()))?;

    Ok(text.trim().to_string())
}

/// wttr.in accepts '+' for spaces; that covers the "City, ST" inputs the
/// benchmark generates.
fn encode_location(location: &str) -> String {
    location.replace(' ', "+")
}
