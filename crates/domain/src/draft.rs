//! AttributeDraft - saved point-buy progress
//!
//! A draft is the opaque blob a front end persists between sessions: the
//! active system id and the raw attribute values. Restoring one goes through
//! `AttributeEngine::restore`, which trusts the values (no cost checks).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::AttributeSet;

/// Drafts older than this should be confirmed before loading.
pub const DRAFT_STALE_AFTER_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDraft {
    system_id: String,
    attributes: AttributeSet,
    saved_at: DateTime<Utc>,
}

impl AttributeDraft {
    pub fn new(
        system_id: impl Into<String>,
        attributes: AttributeSet,
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            system_id: system_id.into(),
            attributes,
            saved_at,
        }
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    /// Time since the draft was saved (negative if saved "in the future").
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.saved_at
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.age(now) > Duration::days(DRAFT_STALE_AFTER_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> AttributeDraft {
        AttributeDraft::new(
            "dnd5e",
            AttributeSet::from_array([15, 14, 13, 12, 10, 8]),
            saved_at(),
        )
    }

    #[test]
    fn fresh_draft_is_not_stale() {
        let now = saved_at() + Duration::days(7);
        assert!(!sample().is_stale(now));
    }

    #[test]
    fn week_old_draft_is_stale() {
        let now = saved_at() + Duration::days(7) + Duration::seconds(1);
        assert!(sample().is_stale(now));
        assert_eq!(sample().age(now).num_days(), 7);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["systemId"], "dnd5e");
        assert_eq!(json["attributes"]["strength"], 15);
        assert!(json["savedAt"].as_str().unwrap().starts_with("2025-03-01T12:00:00"));

        let back: AttributeDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
