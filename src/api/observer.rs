//! Per-client request observation
//!
//! Each `ProntoClient` carries its own observer so callers decide where call
//! logging goes. The default forwards to `tracing`; the library never installs
//! a subscriber itself.

use crate::error::ProntoError;

/// Hooks invoked around every HTTP call a client makes.
///
/// For one call the order is `on_request`, then either `on_response` (a status
/// line was received) or nothing, then `on_error` if the call failed. A call
/// failing on status gets both `on_response` and `on_error`.
pub trait RequestObserver: Send + Sync {
    /// Called before the request is sent.
    fn on_request(&self, endpoint: &str, url: &str);

    /// Called once a status line has been received.
    fn on_response(&self, endpoint: &str, status: u16);

    /// Called with the error a failed call is about to return.
    fn on_error(&self, endpoint: &str, error: &ProntoError);
}

/// Observer that emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, endpoint: &str, url: &str) {
        tracing::debug!("POST {} ({})", url, endpoint);
    }

    fn on_response(&self, endpoint: &str, status: u16) {
        tracing::debug!("{} -> HTTP {}", endpoint, status);
    }

    fn on_error(&self, endpoint: &str, error: &ProntoError) {
        tracing::error!("{} failed: {}", endpoint, error);
    }
}

/// Observer that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _endpoint: &str, _url: &str) {}

    fn on_response(&self, _endpoint: &str, _status: u16) {}

    fn on_error(&self, _endpoint: &str, _error: &ProntoError) {}
}
