//! Tool-call verdict evaluation.
//!
//! Scores one benchmark exchange: given the model's proposed tool calls, the
//! caller-declared expectation, and the model's free text, decide pass/fail
//! and record every attempt. Tool execution happens through the
//! [`ToolExecutor`] seam so the evaluator stays a pure function of its
//! inputs given deterministic tool outputs.
//!
//! Expectation tracking is an explicit state machine driven per proposed
//! call; the terminal state, the execution outcomes, and content emptiness
//! together decide the boolean verdict.
//!
//! Tool-name comparison is case-insensitive (ASCII) with surrounding
//! whitespace trimmed, on both sides.

use crate::error::ToolError;
use crate::schemas::{ProposedCall, ToolCallRecord};
use async_trait::async_trait;
use serde_json::Value;

/// Expected-tool value indicating no tool call should occur.
pub const NONE_SENTINEL: &str = "none";

/// Wire output for a call skipped because no tool was expected.
pub const SKIP_NOT_REQUIRED: &str =
    "Tool execution error :: Tool call was not required, tool execution skipped";

/// Wire output for a call skipped because it named the wrong tool.
pub const SKIP_WRONG_TOOL: &str =
    "Tool execution error :: Wrong tool called, tool execution skipped";

/// Executes a proposed tool call. Implemented by the daemon's tool registry
/// and by fakes in tests.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, name: &str, arguments: &Value) -> Result<String, ToolError>;
}

/// Caller-declared ground truth for which tool should have been invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// No expectation declared: the verdict comes from execution outcomes
    /// and content alone.
    Unconstrained,
    /// The model must not call any real tool.
    NoTool,
    /// Every proposed call must name exactly this tool.
    Tool(String),
}

impl Expectation {
    /// Parse the optional `expected_tool` request field. The sentinel
    /// `"none"` (any case) means no tool should be called; an absent or
    /// empty value means unconstrained.
    pub fn parse(expected_tool: Option<&str>) -> Self {
        match expected_tool.map(str::trim) {
            None | Some("") => Expectation::Unconstrained,
            Some(s) if s.eq_ignore_ascii_case(NONE_SENTINEL) => Expectation::NoTool,
            Some(s) => Expectation::Tool(s.to_string()),
        }
    }
}

/// Typed outcome of one proposed call.
///
/// `render()` produces the wire strings the UI keys on; failure detection
/// everywhere else goes through the type, never through the strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The tool ran and returned output (empty for the no-op sentinel).
    Output(String),
    /// A real tool was proposed although no tool was expected.
    NotRequired,
    /// The proposed name did not match the expected tool.
    WrongTool,
    /// The registry or the tool itself failed.
    Failed(String),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Output(_))
    }

    /// Wire rendering. Failures keep the `Tool execution error` prefix so
    /// the reply stays compatible with existing UI and logs.
    pub fn render(&self) -> String {
        match self {
            AttemptOutcome::Output(s) => s.clone(),
            AttemptOutcome::NotRequired => SKIP_NOT_REQUIRED.to_string(),
            AttemptOutcome::WrongTool => SKIP_WRONG_TOOL.to_string(),
            AttemptOutcome::Failed(msg) => format!("Tool execution error: {msg}"),
        }
    }
}

/// One proposed call together with its typed outcome. Immutable once
/// recorded; owned by the [`EvaluationVerdict`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallAttempt {
    pub name: String,
    pub arguments: Value,
    pub outcome: AttemptOutcome,
}

impl ToolCallAttempt {
    pub fn to_record(&self) -> ToolCallRecord {
        ToolCallRecord {
            name: self.name.clone(),
            args: self.arguments.clone(),
            output: self.outcome.render(),
        }
    }
}

/// The boolean verdict plus supporting evidence for one benchmark exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationVerdict {
    pub success: bool,
    pub attempts: Vec<ToolCallAttempt>,
    pub model_text: String,
}

/// Expectation tracking across proposed calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EvalState {
    /// A specific tool is expected and no call has been seen yet.
    Pending,
    /// No expectation declared.
    Unconstrained,
    /// The expected tool was called.
    MatchedExpected,
    /// A call named something other than the expected tool. Terminal.
    MismatchedExpected,
    /// No tool expected and none (or only sentinel names) proposed.
    NoToolExpectedSatisfied,
    /// No tool expected but a real tool was proposed. Terminal.
    NoToolExpectedViolated,
}

fn is_noop_name(name: &str) -> bool {
    name.is_empty() || name.eq_ignore_ascii_case(NONE_SENTINEL)
}

fn record(call: &ProposedCall, outcome: AttemptOutcome) -> ToolCallAttempt {
    ToolCallAttempt {
        name: call.name.clone(),
        arguments: call.arguments.clone(),
        outcome,
    }
}

/// Evaluate one exchange.
///
/// Processes proposed calls in order, short-circuiting on an expectation
/// violation. Execution failures are recorded and fail the verdict but do
/// not stop the remaining calls.
pub async fn evaluate(
    calls: &[ProposedCall],
    expectation: &Expectation,
    executor: &dyn ToolExecutor,
    content: &str,
) -> EvaluationVerdict {
    let model_text = content.trim().to_string();
    let mut attempts = Vec::with_capacity(calls.len());
    let mut execution_failed = false;
    let mut state = match expectation {
        Expectation::Unconstrained => EvalState::Unconstrained,
        Expectation::NoTool => EvalState::NoToolExpectedSatisfied,
        Expectation::Tool(_) => EvalState::Pending,
    };

    for call in calls {
        let name = call.name.trim();

        match expectation {
            Expectation::NoTool => {
                if is_noop_name(name) {
                    // Sentinel names satisfy the no-tool expectation.
                    attempts.push(record(call, AttemptOutcome::Output(String::new())));
                } else {
                    attempts.push(record(call, AttemptOutcome::NotRequired));
                    state = EvalState::NoToolExpectedViolated;
                    break;
                }
            }
            Expectation::Tool(expected) => {
                if !name.eq_ignore_ascii_case(expected.trim()) {
                    attempts.push(record(call, AttemptOutcome::WrongTool));
                    state = EvalState::MismatchedExpected;
                    break;
                }
                state = EvalState::MatchedExpected;
                match executor.execute(name, &call.arguments).await {
                    Ok(output) => attempts.push(record(call, AttemptOutcome::Output(output))),
                    Err(e) => {
                        execution_failed = true;
                        attempts.push(record(call, AttemptOutcome::Failed(e.to_string())));
                    }
                }
            }
            Expectation::Unconstrained => {
                if is_noop_name(name) {
                    attempts.push(record(call, AttemptOutcome::Output(String::new())));
                    continue;
                }
                match executor.execute(name, &call.arguments).await {
                    Ok(output) => attempts.push(record(call, AttemptOutcome::Output(output))),
                    Err(e) => {
                        execution_failed = true;
                        attempts.push(record(call, AttemptOutcome::Failed(e.to_string())));
                    }
                }
            }
        }
    }

    let any_successful_output = attempts
        .iter()
        .any(|a| matches!(&a.outcome, AttemptOutcome::Output(s) if !s.is_empty()));

    let success = match state {
        EvalState::NoToolExpectedSatisfied => true,
        EvalState::NoToolExpectedViolated | EvalState::MismatchedExpected => false,
        EvalState::Pending | EvalState::Unconstrained | EvalState::MatchedExpected => {
            // A model that neither answered nor produced usable tool output
            // fails; otherwise the per-call outcomes decide.
            if model_text.is_empty() && !any_successful_output {
                false
            } else {
                !execution_failed
            }
        }
    };

    EvaluationVerdict {
        success,
        attempts,
        model_text,
    }
}
