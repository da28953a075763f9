//! Unified error types for the point-buy domain
//!
//! Rejected deltas are not errors: `apply_delta` reports how far it got. The
//! variants here cover malformed configuration and unknown names only.

use thiserror::Error;

/// Unified error type for point-buy operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointBuyError {
    /// A cost system failed validation at registration
    #[error("Invalid cost system '{system_id}': {reason}")]
    InvalidSystemConfig { system_id: String, reason: String },

    /// A cost system id was requested that was never registered
    #[error("Unknown cost system: {0}")]
    UnknownSystem(String),

    /// An attribute name did not match any of the six attributes
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

impl PointBuyError {
    /// Creates a configuration error for a rejected registration.
    ///
    /// Use this when a cost system's bounds, budget or cost table make the
    /// budget invariant unenforceable:
    /// - `min_value` above `max_value`
    /// - negative point budget
    /// - six attributes at the minimum already over budget
    ///
    /// # Example
    /// ```ignore
    /// if min_value > max_value {
    ///     return Err(PointBuyError::invalid_config(id, "min_value exceeds max_value"));
    /// }
    /// ```
    pub fn invalid_config(system_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSystemConfig {
            system_id: system_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown system error
    pub fn unknown_system(system_id: impl Into<String>) -> Self {
        Self::UnknownSystem(system_id.into())
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }
}
