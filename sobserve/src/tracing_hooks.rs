//! Tracing-based observability hooks for client requests and tool execution.
//!
//! ```rust
//! use sobserve::TracingObservabilityHooks;
//! use stooling::ToolRuntimeHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use sclient::{ApiError, ClientHooks};
use stooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ClientHooks for TracingObservabilityHooks {
    fn on_request_start(&self, operation: &str) {
        tracing::debug!(phase = "client", event = "request_start", operation);
    }

    fn on_request_success(&self, operation: &str, elapsed: Duration) {
        tracing::info!(
            phase = "client",
            event = "request_success",
            operation,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_request_failure(&self, operation: &str, error: &ApiError, elapsed: Duration) {
        tracing::error!(
            phase = "client",
            event = "request_failure",
            operation,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }

    fn on_not_found(&self, operation: &str, reference: &str) {
        tracing::warn!(
            phase = "client",
            event = "not_found",
            operation,
            reference
        );
    }
}

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str())
        );
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "tool",
            event = "execution_success",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "tool",
            event = "execution_failure",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}
