//! Typed errors for the discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! The split between [`DiscoveryError::SearchTimeout`] and
//! [`DiscoveryError::SearchProvider`] is load-bearing: callers surface the
//! two with different messages, and only the timeout carries the deadline.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Search provider call exceeded the gateway deadline.
    ///
    /// Terminal for the request. Never folded into [`Self::SearchProvider`].
    #[error("search timed out after {}s", limit.as_secs())]
    SearchTimeout { limit: Duration },

    /// Search provider failed for any non-timeout reason.
    ///
    /// Terminal for the request; the provider's message is propagated.
    #[error("search provider error: {0}")]
    SearchProvider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Query synthesis call failed.
    ///
    /// Non-fatal: the planner absorbs this and builds a deterministic
    /// fallback query instead.
    #[error("query synthesis error: {0}")]
    QuerySynthesis(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Storage operation failed.
    ///
    /// Absorbed per item during batch persistence, absorbed as a miss
    /// during profile lookup, terminal for recent-job reads.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Input rejected before planning.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// Missing or malformed configuration.
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

impl DiscoveryError {
    /// True when the request was terminated by the gateway deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::SearchTimeout { .. })
    }
}
