//! Operational hooks for client request lifecycle events.
//!
//! ```rust
//! use sclient::{ClientHooks, NoopClientHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ClientHooks) {}
//!
//! let hooks = NoopClientHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use crate::ApiError;

pub trait ClientHooks: Send + Sync {
    fn on_request_start(&self, _operation: &str) {}

    fn on_request_success(&self, _operation: &str, _elapsed: Duration) {}

    fn on_request_failure(&self, _operation: &str, _error: &ApiError, _elapsed: Duration) {}

    /// A well-formed response carried no usable result for the reference.
    fn on_not_found(&self, _operation: &str, _reference: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientHooks;

impl ClientHooks for NoopClientHooks {}
