//! Pathfinder point buy.
//!
//! Scores below 10 refund points, so the cost table goes negative.

use crate::value_objects::{CostSystem, CostTable};

pub const PATHFINDER_ID: &str = "pathfinder";

/// Cost per score, starting at 7.
const PATHFINDER_COSTS: [i32; 12] = [
    -4, // 7
    -2, // 8
    -1, // 9
    0,  // 10
    1,  // 11
    2,  // 12
    3,  // 13
    5,  // 14
    7,  // 15
    10, // 16
    13, // 17
    17, // 18
];

/// Pathfinder 20-point ("standard fantasy") buy.
pub fn pathfinder() -> CostSystem {
    CostSystem::new(
        PATHFINDER_ID,
        "Pathfinder",
        7,
        18,
        20,
        CostTable::capped(7, PATHFINDER_COSTS.to_vec()),
    )
}
