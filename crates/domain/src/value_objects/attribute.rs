//! Attribute and AttributeSet - the six point-buy ability scores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PointBuyError;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    /// Canonical lowercase name (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter sheet abbreviation (e.g., "STR").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Position in [`Attribute::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }

    /// Physical attributes (STR, DEX, CON).
    pub fn is_physical(&self) -> bool {
        matches!(self, Self::Strength | Self::Dexterity | Self::Constitution)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = PointBuyError;

    /// Accepts the full name or the abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "constitution" | "con" => Ok(Self::Constitution),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            _ => Err(PointBuyError::unknown_attribute(s)),
        }
    }
}

/// Values for all six attributes.
///
/// Serialized as a flat camelCase object so drafts stay readable:
/// `{"strength": 15, "dexterity": 14, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl AttributeSet {
    /// Number of attribute slots.
    pub const LEN: i32 = 6;

    /// Every attribute at the same value.
    pub fn uniform(value: i32) -> Self {
        Self::from_array([value; 6])
    }

    /// Build from values in [`Attribute::ALL`] order.
    pub fn from_array(values: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = values;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Values in [`Attribute::ALL`] order.
    pub fn to_array(&self) -> [i32; 6] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Set a value directly. Budget rules are enforced by the engine, not here.
    pub(crate) fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    /// Builder-style copy with one attribute changed.
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterate `(attribute, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(move |attr| (*attr, self.get(*attr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_names_and_abbreviations() {
        assert_eq!("strength".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("DEX".parse::<Attribute>().unwrap(), Attribute::Dexterity);
        assert_eq!(" Wisdom ".parse::<Attribute>().unwrap(), Attribute::Wisdom);
        assert_eq!("cha".parse::<Attribute>().unwrap(), Attribute::Charisma);
    }

    #[test]
    fn rejects_unknown_attribute_name() {
        let err = "luck".parse::<Attribute>().unwrap_err();
        assert_eq!(err, PointBuyError::unknown_attribute("luck"));
    }

    #[test]
    fn index_matches_all_order() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn physical_attributes() {
        let physical: Vec<_> = Attribute::ALL.iter().filter(|a| a.is_physical()).collect();
        assert_eq!(physical.len(), 3);
        assert!(!Attribute::Intelligence.is_physical());
    }

    #[test]
    fn set_and_get_by_attribute() {
        let set = AttributeSet::uniform(8).with(Attribute::Wisdom, 14);
        assert_eq!(set.get(Attribute::Wisdom), 14);
        assert_eq!(set.get(Attribute::Strength), 8);
        assert_eq!(set.to_array(), [8, 8, 8, 8, 14, 8]);
    }

    #[test]
    fn serializes_as_named_fields() {
        let set = AttributeSet::from_array([15, 14, 13, 12, 10, 8]);
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(json["strength"], 15);
        assert_eq!(json["charisma"], 8);

        let back: AttributeSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn attribute_serializes_lowercase() {
        let json = serde_json::to_string(&Attribute::Constitution).unwrap();
        assert_eq!(json, "\"constitution\"");
    }
}
