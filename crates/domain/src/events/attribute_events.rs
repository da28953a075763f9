//! Attribute mutation outcomes
//!
//! These are returned from engine mutations so callers can tell a full step
//! from a partial or rejected one without treating either as an error.

use serde::{Deserialize, Serialize};

use crate::value_objects::Attribute;

/// Outcome of a (possibly multi-unit) attribute delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaOutcome {
    pub attribute: Attribute,
    /// Step the caller asked for (e.g., +5)
    pub requested: i32,
    /// Signed number of unit steps actually applied
    pub applied: i32,
    pub previous_value: i32,
    pub value: i32,
    pub remaining_budget: i32,
}

impl DeltaOutcome {
    /// Every requested unit step was applied.
    pub fn is_complete(&self) -> bool {
        self.applied == self.requested
    }

    /// Some but not all unit steps were applied.
    pub fn is_partial(&self) -> bool {
        self.applied != 0 && !self.is_complete()
    }

    /// Nothing changed (bound or budget blocked the first unit).
    pub fn is_rejected(&self) -> bool {
        self.applied == 0 && self.requested != 0
    }

    pub fn changed(&self) -> bool {
        self.value != self.previous_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(requested: i32, applied: i32) -> DeltaOutcome {
        DeltaOutcome {
            attribute: Attribute::Strength,
            requested,
            applied,
            previous_value: 10,
            value: 10 + applied,
            remaining_budget: 0,
        }
    }

    #[test]
    fn classifies_complete_partial_and_rejected() {
        assert!(outcome(5, 5).is_complete());
        assert!(outcome(5, 2).is_partial());
        assert!(outcome(-5, -1).is_partial());
        assert!(outcome(1, 0).is_rejected());
        assert!(!outcome(1, 0).changed());
    }

    #[test]
    fn zero_step_is_complete_not_rejected() {
        let zero = outcome(0, 0);
        assert!(zero.is_complete());
        assert!(!zero.is_rejected());
        assert!(!zero.is_partial());
    }
}
