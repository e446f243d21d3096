//! Error types for documentation scope resolution.
//!
//! Every failure is a local precondition violation: the inputs handed to the
//! resolver cannot produce a complete [`DocumentationScope`](crate::scope::DocumentationScope).
//! Nothing here is retryable, since the computation is deterministic.

use thiserror::Error;

/// Errors raised while computing a documentation scope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A required project field is missing or the resolution result is
    /// marked as failed upstream.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Packaging value the resolver does not know how to treat.
    ///
    /// Reserved: every packaging other than the aggregator value is currently
    /// handled uniformly, so the resolver never constructs this variant.
    #[error("unsupported packaging: {0}")]
    UnsupportedPackaging(String),
}

/// Convenience alias used across the scope modules.
pub type Result<T> = std::result::Result<T, ScopeError>;
