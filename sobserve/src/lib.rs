//! Production-friendly observability hooks for client and tool phases.
//!
//! ```rust
//! use sobserve::{MetricsObservabilityHooks, TracingObservabilityHooks};
//!
//! let _tracing = TracingObservabilityHooks;
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{MetricsObservabilityHooks, TracingObservabilityHooks};
}
