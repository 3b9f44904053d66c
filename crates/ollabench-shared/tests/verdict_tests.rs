//! Golden tests for the verdict evaluator.
//!
//! These tests lock exact behavior, including the wire strings attached to
//! skipped and failed attempts. They are deterministic: tool execution goes
//! through a fake executor, no network, no clock.

use async_trait::async_trait;
use ollabench_shared::error::ToolError;
use ollabench_shared::schemas::ProposedCall;
use ollabench_shared::verdict::{
    evaluate, AttemptOutcome, Expectation, ToolExecutor, SKIP_NOT_REQUIRED, SKIP_WRONG_TOOL,
};
use serde_json::{json, Value};

/// Fake registry: two working tools, one that always fails, everything else
/// unknown.
struct FakeRegistry;

#[async_trait]
impl ToolExecutor for FakeRegistry {
    async fn execute(&self, name: &str, _arguments: &Value) -> Result<String, ToolError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "get_current_weather" => Ok("Oslo: cloudy, 12C".to_string()),
            "get_system_time" => Ok("2026-08-29 12:00:00".to_string()),
            "broken_tool" => Err(ToolError::Execution("upstream failed".to_string())),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

/// A tool that succeeds but returns nothing.
struct SilentRegistry;

#[async_trait]
impl ToolExecutor for SilentRegistry {
    async fn execute(&self, _name: &str, _arguments: &Value) -> Result<String, ToolError> {
        Ok(String::new())
    }
}

fn weather_call() -> ProposedCall {
    ProposedCall::new("get_current_weather", json!({"location": "Oslo"}))
}

fn time_call() -> ProposedCall {
    ProposedCall::new("get_system_time", json!({}))
}

// === No-tool expectation ===

/// GOLDEN: expected "none", zero calls, non-empty content -> pass.
#[tokio::test]
async fn no_tool_expected_and_none_proposed_passes() {
    let verdict = evaluate(&[], &Expectation::NoTool, &FakeRegistry, "It is four.").await;

    assert!(verdict.success);
    assert!(verdict.attempts.is_empty());
    assert_eq!(verdict.model_text, "It is four.");
}

/// GOLDEN: expected "none", zero calls, empty content -> still a pass.
/// The no-tool expectation is exempt from the empty-content rule.
#[tokio::test]
async fn no_tool_expected_passes_even_without_content() {
    let verdict = evaluate(&[], &Expectation::NoTool, &FakeRegistry, "").await;
    assert!(verdict.success);
}

/// GOLDEN: expected "none" but a real tool proposed -> fail with the exact
/// skip string, and no further calls are processed.
#[tokio::test]
async fn no_tool_expected_violation_short_circuits() {
    let calls = vec![weather_call(), time_call()];
    let verdict = evaluate(&calls, &Expectation::NoTool, &FakeRegistry, "Sure!").await;

    assert!(!verdict.success);
    assert_eq!(verdict.attempts.len(), 1, "second call must not be processed");
    assert_eq!(verdict.attempts[0].outcome, AttemptOutcome::NotRequired);
    assert_eq!(verdict.attempts[0].to_record().output, SKIP_NOT_REQUIRED);
}

/// Calls named with the sentinel (or nothing) satisfy the no-tool
/// expectation and resolve to no-op attempts with empty output.
#[tokio::test]
async fn no_tool_expected_tolerates_sentinel_names() {
    let calls = vec![
        ProposedCall::new("none", Value::Null),
        ProposedCall::new("", Value::Null),
    ];
    let verdict = evaluate(&calls, &Expectation::NoTool, &FakeRegistry, "").await;

    assert!(verdict.success);
    assert_eq!(verdict.attempts.len(), 2);
    for attempt in &verdict.attempts {
        assert_eq!(attempt.outcome, AttemptOutcome::Output(String::new()));
        assert_eq!(attempt.to_record().output, "");
    }
}

// === Specific-tool expectation ===

/// GOLDEN: expected weather, first call is the time tool -> fail with the
/// exact skip string, short-circuit.
#[tokio::test]
async fn wrong_tool_short_circuits() {
    let calls = vec![time_call(), weather_call()];
    let expectation = Expectation::Tool("get_current_weather".to_string());
    let verdict = evaluate(&calls, &expectation, &FakeRegistry, "").await;

    assert!(!verdict.success);
    assert_eq!(verdict.attempts.len(), 1);
    assert_eq!(verdict.attempts[0].outcome, AttemptOutcome::WrongTool);
    assert_eq!(verdict.attempts[0].to_record().output, SKIP_WRONG_TOOL);
}

/// Expected tool called and executed -> pass, output recorded verbatim.
#[tokio::test]
async fn expected_tool_match_executes() {
    let calls = vec![weather_call()];
    let expectation = Expectation::Tool("get_current_weather".to_string());
    let verdict = evaluate(&calls, &expectation, &FakeRegistry, "Checking the weather.").await;

    assert!(verdict.success);
    assert_eq!(
        verdict.attempts[0].outcome,
        AttemptOutcome::Output("Oslo: cloudy, 12C".to_string())
    );
}

/// Name matching against the expectation ignores case and whitespace.
#[tokio::test]
async fn expected_tool_match_is_case_insensitive() {
    let calls = vec![ProposedCall::new(
        " Get_Current_Weather ",
        json!({"location": "Oslo"}),
    )];
    let expectation = Expectation::Tool("get_current_weather".to_string());
    let verdict = evaluate(&calls, &expectation, &FakeRegistry, "").await;

    assert!(verdict.success);
    assert!(verdict.attempts[0].outcome.is_success());
}

/// Expected tool matched but its execution failed -> fail, attempt carries
/// the error-marker output.
#[tokio::test]
async fn expected_tool_execution_failure_fails_verdict() {
    struct FailingWeather;

    #[async_trait]
    impl ToolExecutor for FailingWeather {
        async fn execute(&self, _name: &str, _arguments: &Value) -> Result<String, ToolError> {
            Err(ToolError::Execution("weather service returned 503".to_string()))
        }
    }

    let calls = vec![weather_call()];
    let expectation = Expectation::Tool("get_current_weather".to_string());
    let verdict = evaluate(&calls, &expectation, &FailingWeather, "Let me check.").await;

    assert!(!verdict.success);
    assert_eq!(
        verdict.attempts[0].to_record().output,
        "Tool execution error: weather service returned 503"
    );
}

/// Expected a tool, model proposed nothing: content decides.
#[tokio::test]
async fn expected_tool_with_no_calls_falls_back_to_content() {
    let expectation = Expectation::Tool("get_current_weather".to_string());

    let with_content = evaluate(&[], &expectation, &FakeRegistry, "It is sunny.").await;
    assert!(with_content.success);

    let without_content = evaluate(&[], &expectation, &FakeRegistry, "").await;
    assert!(!without_content.success);
}

// === Unconstrained ===

/// GOLDEN: no expectation, empty content, sole call succeeds with non-empty
/// output -> pass (tool output rescues the empty answer).
#[tokio::test]
async fn tool_output_rescues_empty_content() {
    let calls = vec![time_call()];
    let verdict = evaluate(&calls, &Expectation::Unconstrained, &FakeRegistry, "").await;

    assert!(verdict.success);
    assert_eq!(
        verdict.attempts[0].outcome,
        AttemptOutcome::Output("2026-08-29 12:00:00".to_string())
    );
}

/// GOLDEN: no expectation, empty content, zero calls -> fail.
#[tokio::test]
async fn empty_everything_fails() {
    let verdict = evaluate(&[], &Expectation::Unconstrained, &FakeRegistry, "").await;
    assert!(!verdict.success);
    assert!(verdict.attempts.is_empty());
}

/// Zero calls with non-empty content -> pass.
#[tokio::test]
async fn content_alone_passes() {
    let verdict = evaluate(&[], &Expectation::Unconstrained, &FakeRegistry, "Here's a joke.").await;
    assert!(verdict.success);
}

/// An execution error fails the verdict but does not abort the remaining
/// calls.
#[tokio::test]
async fn execution_error_does_not_abort_remaining_calls() {
    let calls = vec![ProposedCall::new("broken_tool", json!({})), time_call()];
    let verdict = evaluate(&calls, &Expectation::Unconstrained, &FakeRegistry, "text").await;

    assert!(!verdict.success);
    assert_eq!(verdict.attempts.len(), 2);
    assert_eq!(
        verdict.attempts[0].to_record().output,
        "Tool execution error: upstream failed"
    );
    assert!(verdict.attempts[1].outcome.is_success());
}

/// A name the registry does not know is an execution error, not a silent
/// no-op.
#[tokio::test]
async fn unknown_tool_is_an_error() {
    let calls = vec![ProposedCall::new("get_stock_price", json!({}))];
    let verdict = evaluate(&calls, &Expectation::Unconstrained, &FakeRegistry, "text").await;

    assert!(!verdict.success);
    assert_eq!(
        verdict.attempts[0].to_record().output,
        "Tool execution error: unknown tool 'get_stock_price'"
    );
}

/// Sentinel-named calls are no-ops even without an expectation.
#[tokio::test]
async fn sentinel_names_are_noops_when_unconstrained() {
    let calls = vec![ProposedCall::new("none", Value::Null)];
    let verdict = evaluate(&calls, &Expectation::Unconstrained, &FakeRegistry, "answer").await;

    assert!(verdict.success);
    assert_eq!(verdict.attempts[0].outcome, AttemptOutcome::Output(String::new()));
}

/// Empty content plus a tool that succeeded with empty output -> fail; an
/// empty output cannot stand in for an answer.
#[tokio::test]
async fn empty_tool_output_does_not_rescue_empty_content() {
    let calls = vec![time_call()];
    let verdict = evaluate(&calls, &Expectation::Unconstrained, &SilentRegistry, "").await;
    assert!(!verdict.success);
}

// === Idempotence ===

/// Re-running the evaluation with identical inputs yields an identical
/// verdict.
#[tokio::test]
async fn evaluation_is_idempotent() {
    let calls = vec![weather_call(), ProposedCall::new("broken_tool", json!({}))];
    let expectation = Expectation::Unconstrained;

    let first = evaluate(&calls, &expectation, &FakeRegistry, "some text").await;
    let second = evaluate(&calls, &expectation, &FakeRegistry, "some text").await;

    assert_eq!(first, second);
}
