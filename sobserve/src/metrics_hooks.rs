//! Metrics-based observability hooks for client requests and tool execution.
//!
//! ```rust
//! use sclient::ClientHooks;
//! use sobserve::MetricsObservabilityHooks;
//!
//! fn accepts_client_hooks(_hooks: &dyn ClientHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_client_hooks(&hooks);
//! ```

use std::time::Duration;

use sclient::{ApiError, ClientHooks};
use stooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ClientHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, operation: &str) {
        metrics::counter!(
            "sifriya_client_request_start_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_request_success(&self, operation: &str, elapsed: Duration) {
        metrics::counter!(
            "sifriya_client_request_success_total",
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "sifriya_client_request_duration_seconds",
            "operation" => operation.to_string(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_request_failure(&self, operation: &str, error: &ApiError, elapsed: Duration) {
        metrics::counter!(
            "sifriya_client_request_failure_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "sifriya_client_request_duration_seconds",
            "operation" => operation.to_string(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_not_found(&self, operation: &str, _reference: &str) {
        metrics::counter!(
            "sifriya_client_not_found_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }
}

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "sifriya_tool_execution_start_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "sifriya_tool_execution_success_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "sifriya_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "sifriya_tool_execution_failure_total",
            "tool_name" => tool_call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "sifriya_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
