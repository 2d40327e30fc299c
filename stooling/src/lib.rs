//! Capability layer for registering and executing tools.

mod args;
mod error;
mod hooks;
mod registry;
mod runtime;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolRuntime, FunctionTool, NoopToolRuntimeHooks, Tool, ToolCall, ToolDefinition,
        ToolError, ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture,
        ToolRegistry, ToolRuntime, ToolRuntimeHooks,
    };
}

pub use args::{
    optional_bool_or, optional_i64, optional_string, optional_string_list, optional_u32_or,
    parse_json_object, parse_json_value, required_string,
};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use tool::{FunctionTool, Tool, ToolFuture};
pub use types::{ToolCall, ToolDefinition, ToolExecutionContext, ToolExecutionResult};
