//! PointBuy Domain - point-buy attribute budgets for tabletop character creation.
//!
//! The [`AttributeEngine`] tracks six attribute values against a named
//! [`CostSystem`] and refuses any change that would overspend its budget.

pub mod aggregates;
pub mod distribution;
pub mod draft;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::AttributeEngine;
pub use distribution::{distribute, random_distribution, BuildProfile, Distribution, MAX_ATTEMPTS};
pub use draft::{AttributeDraft, DRAFT_STALE_AFTER_DAYS};
pub use error::PointBuyError;
pub use events::{AttributeEvent, AttributeObserver, DeltaOutcome, ObserverId, ResetReason};

// Re-export built-in rule sets
pub use game_systems::{
    builtin_systems, custom, custom_default, dnd35, dnd5e, pathfinder, CUSTOM_DEFAULT_BUDGET,
    CUSTOM_DEFAULT_MAX, CUSTOM_DEFAULT_MIN, CUSTOM_ID, DEFAULT_SYSTEM_ID, DND35_ID, DND5E_ID,
    PATHFINDER_ID,
};

// Re-export value objects
pub use value_objects::{
    ability_modifier, estimated_level, format_modifier, neutral_value, proficiency_bonus,
    Attribute, AttributeSet, CostSystem, CostTable, ModifierKind, OutOfRangePolicy,
    UNAFFORDABLE_COST,
};
