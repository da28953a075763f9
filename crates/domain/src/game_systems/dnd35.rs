//! D&D 3.5 point buy ("high-powered" 25-point campaign).

use crate::value_objects::{CostSystem, CostTable};

pub const DND35_ID: &str = "dnd35";

/// Cost per score, starting at 8.
const DND35_COSTS: [i32; 11] = [
    0,  // 8
    1,  // 9
    2,  // 10
    3,  // 11
    4,  // 12
    5,  // 13
    6,  // 14
    8,  // 15
    10, // 16
    13, // 17
    16, // 18
];

pub fn dnd35() -> CostSystem {
    CostSystem::new(
        DND35_ID,
        "D&D 3.5",
        8,
        18,
        25,
        CostTable::capped(8, DND35_COSTS.to_vec()),
    )
}
