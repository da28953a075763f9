//! Custom point buy with caller-chosen bounds and budget.
//!
//! Uses the 5e table up to 15, a steeper run to 20, and doubling surcharges
//! past the table so extreme scores stay possible but ruinous.

use super::dnd5e::DND5E_COSTS;
use crate::value_objects::{CostSystem, CostTable, OutOfRangePolicy};

pub const CUSTOM_ID: &str = "custom";

pub const CUSTOM_DEFAULT_MIN: i32 = 8;
pub const CUSTOM_DEFAULT_MAX: i32 = 15;
pub const CUSTOM_DEFAULT_BUDGET: i32 = 27;

/// Costs for 16 through 20, continuing the 5e table.
const CUSTOM_HIGH_COSTS: [i32; 5] = [
    11, // 16
    14, // 17
    18, // 18
    23, // 19
    29, // 20
];

fn custom_table() -> CostTable {
    let costs = DND5E_COSTS
        .iter()
        .chain(CUSTOM_HIGH_COSTS.iter())
        .copied()
        .collect();
    CostTable::new(8, costs, OutOfRangePolicy::Exponential { base: 2 })
}

/// Custom system with the given bounds and budget. Validate before use;
/// the engine does so on registration.
pub fn custom(min_value: i32, max_value: i32, point_budget: i32) -> CostSystem {
    CostSystem::new(
        CUSTOM_ID,
        "Custom",
        min_value,
        max_value,
        point_budget,
        custom_table(),
    )
}

/// Custom system with 5e-like defaults.
pub fn custom_default() -> CostSystem {
    custom(CUSTOM_DEFAULT_MIN, CUSTOM_DEFAULT_MAX, CUSTOM_DEFAULT_BUDGET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointBuyError;

    #[test]
    fn default_custom_is_valid() {
        assert!(custom_default().validate().is_ok());
    }

    #[test]
    fn matches_dnd5e_up_to_fifteen() {
        let system = custom_default();
        for (offset, expected) in DND5E_COSTS.iter().enumerate() {
            assert_eq!(system.cost(8 + offset as i32), *expected);
        }
    }

    #[test]
    fn escalates_past_fifteen() {
        let system = custom(3, 24, 60);
        assert_eq!(system.cost(16), 11);
        assert_eq!(system.cost(20), 29);
        assert_eq!(system.cost(21), 33);
        assert_eq!(system.cost(24), 61);
        assert_eq!(system.cost(5), 0);
        assert!(system.validate().is_ok());
    }

    #[test]
    fn extreme_maximum_saturates_instead_of_failing() {
        let system = custom(8, 60, 27);
        assert!(system.validate().is_ok());
        assert_eq!(system.cost(60), i32::MAX);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = custom(15, 8, 27).validate().unwrap_err();
        assert!(matches!(err, PointBuyError::InvalidSystemConfig { .. }));
    }
}
