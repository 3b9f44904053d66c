//! API routes for ollabenchd

use crate::ollama::OllamaClient;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use ollabench_shared::prompt;
use ollabench_shared::schemas::{BenchmarkRequest, BenchmarkResponse, HealthResponse};
use ollabench_shared::verdict::{evaluate, Expectation};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Benchmark Route
// ============================================================================

pub fn benchmark_routes() -> Router<AppStateArc> {
    Router::new().route("/benchmark", post(run_benchmark))
}

/// Run one benchmark exchange: prompt the model, execute any proposed tool
/// calls, and score the result against the expected tool.
///
/// Status policy: 400 for invalid input, 500 for model initialization or
/// invocation failures, 200 for every completed evaluation - including
/// `success: false` business verdicts.
async fn run_benchmark(
    State(state): State<AppStateArc>,
    Json(req): Json<BenchmarkRequest>,
) -> (StatusCode, Json<BenchmarkResponse>) {
    let start = Instant::now();

    if req.base_url.trim().is_empty()
        || req.model_name.trim().is_empty()
        || req.sentence.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(failure_reply(&req.sentence, "Invalid input parameters.", start)),
        );
    }

    info!(
        "[B]  {} @ {} expected_tool={:?}",
        req.model_name, req.base_url, req.expected_tool
    );

    // Fresh client per request: the caller picks the endpoint and model.
    let client = match OllamaClient::new(&req.base_url, &req.model_name) {
        Ok(c) => c,
        Err(e) => {
            error!("[-]  {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure_reply(&req.sentence, &e.to_string(), start)),
            );
        }
    };

    let outcome = match client
        .chat_with_tools(
            prompt::SYSTEM_DIRECTIVE,
            &prompt::compose_user_prompt(&req.sentence),
            state.registry.definitions(),
        )
        .await
    {
        Ok(o) => o,
        Err(e) => {
            error!("[-]  {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure_reply(&req.sentence, &e.to_string(), start)),
            );
        }
    };

    let expectation = Expectation::parse(req.expected_tool.as_deref());
    let verdict = evaluate(
        &outcome.tool_calls,
        &expectation,
        state.registry.as_ref(),
        &outcome.content,
    )
    .await;

    let time_taken = start.elapsed().as_millis() as u64;
    info!(
        "[V]  success={} tool_calls={} in {}ms",
        verdict.success,
        verdict.attempts.len(),
        time_taken
    );

    let error = (!verdict.success)
        .then(|| "No successful response or tool execution.".to_string());

    (
        StatusCode::OK,
        Json(BenchmarkResponse {
            success: verdict.success,
            sentence: req.sentence,
            tool_calls: verdict.attempts.iter().map(|a| a.to_record()).collect(),
            model_response: verdict.model_text,
            time_taken,
            error,
        }),
    )
}

fn failure_reply(sentence: &str, error: &str, start: Instant) -> BenchmarkResponse {
    BenchmarkResponse {
        success: false,
        sentence: sentence.to_string(),
        tool_calls: Vec::new(),
        model_response: String::new(),
        time_taken: start.elapsed().as_millis() as u64,
        error: Some(error.to_string()),
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let mut tool_names = state.registry.tool_names();
    tool_names.sort();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        tools_available: tool_names.len(),
        tool_names,
    })
}
