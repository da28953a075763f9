//! D&D 5th Edition point buy.
//!
//! 27 points, scores 8 through 15 before racial bonuses.

use crate::value_objects::{CostSystem, CostTable};

pub const DND5E_ID: &str = "dnd5e";

/// Cost per score, starting at 8.
pub(crate) const DND5E_COSTS: [i32; 8] = [
    0, // 8
    1, // 9
    2, // 10
    3, // 11
    4, // 12
    5, // 13
    7, // 14
    9, // 15
];

/// D&D 5e standard point buy.
pub fn dnd5e() -> CostSystem {
    CostSystem::new(
        DND5E_ID,
        "D&D 5e",
        8,
        15,
        27,
        CostTable::capped(8, DND5E_COSTS.to_vec()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{AttributeSet, UNAFFORDABLE_COST};

    #[test]
    fn dnd5e_is_valid() {
        assert!(dnd5e().validate().is_ok());
    }

    #[test]
    fn dnd5e_costs_match_phb_table() {
        let system = dnd5e();
        assert_eq!(system.cost(8), 0);
        assert_eq!(system.cost(13), 5);
        assert_eq!(system.cost(14), 7);
        assert_eq!(system.cost(15), 9);
        assert_eq!(system.cost(16), UNAFFORDABLE_COST);
    }

    #[test]
    fn standard_array_spends_the_full_budget() {
        let system = dnd5e();
        let standard_array = AttributeSet::from_array([15, 14, 13, 12, 10, 8]);
        assert_eq!(system.remaining(&standard_array), 0);
    }
}
