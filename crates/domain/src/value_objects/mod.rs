//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod cost_system;
mod cost_table;
mod modifier;

pub use attribute::{Attribute, AttributeSet};

// Point-buy rule configuration
pub use cost_system::CostSystem;
pub use cost_table::{CostTable, OutOfRangePolicy, UNAFFORDABLE_COST};

// Derived display values (not part of the budget invariant)
pub use modifier::{
    ability_modifier, estimated_level, format_modifier, neutral_value, proficiency_bonus,
    ModifierKind,
};
