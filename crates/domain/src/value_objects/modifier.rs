//! Derived display values for attribute scores
//!
//! None of these feed the budget engine; they exist so every front end
//! computes the `+2` next to a 14 the same way.

use serde::{Deserialize, Serialize};

/// Which derived value a numeric field displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKind {
    /// Ability modifier, `floor((value - 10) / 2)`.
    #[default]
    Attribute,
    /// Proficiency bonus derived from a level, `ceil(value / 4) + 1`.
    Proficiency,
    /// Estimated level from an experience total.
    Level,
}

impl ModifierKind {
    pub fn derive(&self, value: i32) -> i32 {
        match self {
            Self::Attribute => ability_modifier(value),
            Self::Proficiency => proficiency_bonus(value),
            Self::Level => estimated_level(value),
        }
    }

    /// Display text for the derived value (e.g., "+2", "-1", "Lvl 3").
    pub fn display(&self, value: i32) -> String {
        match self {
            Self::Attribute | Self::Proficiency => format_modifier(self.derive(value)),
            Self::Level => format!("Lvl {}", self.derive(value)),
        }
    }
}

/// Ability modifier, rounded toward negative infinity (7 gives -2).
pub fn ability_modifier(value: i32) -> i32 {
    (value - 10).div_euclid(2)
}

pub fn proficiency_bonus(level: i32) -> i32 {
    // ceil for positive levels; non-positive levels floor at +1
    (level.max(0) + 3) / 4 + 1
}

/// Level estimated from experience: `floor(sqrt(xp / 100))`, clamped to 1..=20.
pub fn estimated_level(experience: i32) -> i32 {
    let scaled = f64::from(experience.max(0)) / 100.0;
    // sqrt of a non-negative i32 / 100 is far below i32::MAX
    (scaled.sqrt().floor() as i32).clamp(1, 20)
}

/// Signed display form: "+0", "+3", "-1".
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

/// First value in `[min, max]` with a +0 ability modifier, or 10 if none.
pub fn neutral_value(min: i32, max: i32) -> i32 {
    (min..=max)
        .find(|value| ability_modifier(*value) == 0)
        .unwrap_or(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_modifier_floors() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn proficiency_bonus_by_level() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(0), 1);
    }

    #[test]
    fn estimated_level_is_clamped() {
        assert_eq!(estimated_level(0), 1);
        assert_eq!(estimated_level(900), 3);
        assert_eq!(estimated_level(10_000), 10);
        assert_eq!(estimated_level(1_000_000), 20);
    }

    #[test]
    fn formats_signed_modifiers() {
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(-1), "-1");
    }

    #[test]
    fn modifier_kind_display() {
        assert_eq!(ModifierKind::Attribute.display(14), "+2");
        assert_eq!(ModifierKind::Attribute.display(8), "-1");
        assert_eq!(ModifierKind::Proficiency.display(5), "+3");
        assert_eq!(ModifierKind::Level.display(2_500), "Lvl 5");
    }

    #[test]
    fn neutral_value_prefers_lowest_zero_modifier() {
        assert_eq!(neutral_value(8, 15), 10);
        assert_eq!(neutral_value(7, 18), 10);
        assert_eq!(neutral_value(11, 18), 11);
        assert_eq!(neutral_value(12, 18), 10);
    }
}
