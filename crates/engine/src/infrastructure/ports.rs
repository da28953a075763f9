//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Draft persistence (could swap the JSON file for browser storage)
//! - Clock (for testing draft staleness)

use chrono::{DateTime, Utc};
use pointbuy_domain::AttributeDraft;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DraftStoreError {
    #[error("Draft storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DraftStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Keeps at most one saved attribute draft.
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send + Sync {
    /// Overwrite the saved draft.
    fn save(&self, draft: &AttributeDraft) -> Result<(), DraftStoreError>;
    /// `Ok(None)` when nothing has been saved.
    fn load(&self) -> Result<Option<AttributeDraft>, DraftStoreError>;
    fn clear(&self) -> Result<(), DraftStoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
