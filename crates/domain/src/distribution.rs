//! Random point-buy distributions
//!
//! Best-effort generator for "give me a plausible character" buttons. It picks
//! a build profile and spends points with a weighted random walk until the
//! budget is gone. A greedy pass in profile order then takes whatever steps
//! are still affordable, which matters for free steps below a cost table.
//! The result always respects the system's bounds and budget.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Attribute, AttributeSet, CostSystem};

/// Upper bound on increment attempts across both phases.
pub const MAX_ATTEMPTS: u32 = 5000;

/// Archetypal spending profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BuildProfile {
    /// Roughly even spread
    Balanced,
    /// Favors STR, DEX, CON
    Physical,
    /// Favors INT, WIS, CHA
    Mental,
    /// One standout attribute, sometimes a second
    Specialist {
        primary: Attribute,
        secondary: Option<Attribute>,
    },
}

impl BuildProfile {
    /// Pick a profile uniformly; specialists get a secondary half the time.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Balanced,
            1 => Self::Physical,
            2 => Self::Mental,
            _ => {
                let primary_index = rng.gen_range(0..Attribute::ALL.len());
                let secondary = rng.gen_bool(0.5).then(|| {
                    let pick = rng.gen_range(0..Attribute::ALL.len() - 1);
                    let index = if pick >= primary_index { pick + 1 } else { pick };
                    Attribute::ALL[index]
                });
                Self::Specialist {
                    primary: Attribute::ALL[primary_index],
                    secondary,
                }
            }
        }
    }

    /// Relative selection weight per attribute, in [`Attribute::ALL`] order.
    pub fn weights(&self) -> [f64; 6] {
        match self {
            Self::Balanced => [0.17, 0.17, 0.17, 0.16, 0.16, 0.17],
            Self::Physical => [0.25, 0.25, 0.25, 0.08, 0.08, 0.09],
            Self::Mental => [0.08, 0.08, 0.09, 0.25, 0.25, 0.25],
            Self::Specialist { primary, secondary } => {
                let mut weights = [0.05; 6];
                weights[primary.index()] = 0.5;
                if let Some(secondary) = secondary {
                    weights[secondary.index()] = 0.25;
                }
                weights
            }
        }
    }
}

/// A generated assignment and the profile that shaped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub profile: BuildProfile,
    pub attributes: AttributeSet,
}

/// Generate a random valid distribution with a randomly chosen profile.
pub fn random_distribution<R: Rng + ?Sized>(system: &CostSystem, rng: &mut R) -> Distribution {
    let profile = BuildProfile::random(rng);
    Distribution {
        profile,
        attributes: distribute(system, profile, rng),
    }
}

/// Spend the budget of `system` following `profile`.
pub fn distribute<R: Rng + ?Sized>(
    system: &CostSystem,
    profile: BuildProfile,
    rng: &mut R,
) -> AttributeSet {
    let weights = profile.weights();
    let mut values = [system.min_value(); 6];
    let mut remaining = system.remaining(&AttributeSet::from_array(values));
    let mut attempts = 0u32;

    let can_raise = |values: &[i32; 6], index: usize, remaining: i32| {
        let value = values[index];
        value < system.max_value() && system.step_cost(value, value + 1) <= remaining
    };

    // Weighted random walk, while points remain
    while remaining > 0 && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let eligible: Vec<usize> = (0..values.len())
            .filter(|i| can_raise(&values, *i, remaining))
            .collect();
        let Ok(&index) = eligible.choose_weighted(rng, |i| weights[*i]) else {
            break;
        };
        values[index] += 1;
        remaining = system.remaining(&AttributeSet::from_array(values));
    }

    // Greedy top-up, heaviest weight first; only free steps are left unless
    // the walk ran out of attempts
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| weights[*b].total_cmp(&weights[*a]));
    while attempts < MAX_ATTEMPTS {
        attempts += 1;
        let Some(index) = order
            .iter()
            .copied()
            .find(|i| can_raise(&values, *i, remaining))
        else {
            break;
        };
        values[index] += 1;
        remaining = system.remaining(&AttributeSet::from_array(values));
    }

    tracing::debug!(
        system_id = system.id(),
        ?profile,
        attempts,
        remaining,
        "Generated random attribute distribution"
    );
    AttributeSet::from_array(values)
}
