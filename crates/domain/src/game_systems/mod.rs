//! Built-in point-buy rule sets.
//!
//! Each module exposes a constructor returning a [`CostSystem`] with its cost
//! table as ordered data.
//!
//! # Supported Systems
//!
//! - D&D 5th Edition (`dnd5e`)
//! - D&D 3.5 (`dnd35`)
//! - Pathfinder (`pathfinder`)
//! - Custom bounds and budget (`custom`)

mod custom;
mod dnd35;
mod dnd5e;
mod pathfinder;

pub use custom::{
    custom, custom_default, CUSTOM_DEFAULT_BUDGET, CUSTOM_DEFAULT_MAX, CUSTOM_DEFAULT_MIN,
    CUSTOM_ID,
};
pub use dnd35::{dnd35, DND35_ID};
pub use dnd5e::{dnd5e, DND5E_ID};
pub use pathfinder::{pathfinder, PATHFINDER_ID};

use crate::value_objects::CostSystem;

/// Id of the system selected when nothing else is requested.
pub const DEFAULT_SYSTEM_ID: &str = DND5E_ID;

/// All built-in systems, in menu order.
pub fn builtin_systems() -> Vec<CostSystem> {
    vec![dnd5e(), dnd35(), pathfinder(), custom_default()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_include_every_system() {
        let ids: Vec<String> = builtin_systems()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(ids, vec!["dnd5e", "dnd35", "pathfinder", "custom"]);
    }

    #[test]
    fn every_builtin_validates() {
        for system in builtin_systems() {
            assert!(system.validate().is_ok(), "{} failed validation", system.id());
        }
    }

    #[test]
    fn builtin_display_names() {
        let systems = builtin_systems();
        assert!(systems
            .iter()
            .any(|s| s.id() == "dnd5e" && s.display_name() == "D&D 5e"));
        assert!(systems
            .iter()
            .any(|s| s.id() == "pathfinder" && s.display_name() == "Pathfinder"));
    }

    #[test]
    fn default_system_is_registered() {
        assert!(builtin_systems().iter().any(|s| s.id() == DEFAULT_SYSTEM_ID));
    }
}
