//! System time tool.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use ollabench_shared::error::ToolError;
use serde_json::Value;

const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read the local clock. Accepts an optional `format` argument (strftime).
pub fn system_time(arguments: &Value) -> Result<String, ToolError> {
    let format = arguments
        .get("format")
        .and_then(|f| f.as_str())
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FORMAT);

    // chrono panics later if an invalid specifier slips into Display, so
    // validate the items up front.
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ToolError::Execution(format!(
            "invalid time format '{format}'"
        )));
    }

    Ok(Local::now().format_with_items(items.into_iter()).to_string())
}
