//! CostTable - ordered value-to-cost mapping with an extrapolation rule
//!
//! A table covers a contiguous run of attribute values starting at
//! `first_value`. Values below the table cost 0. Values above it are priced by
//! the table's [`OutOfRangePolicy`].

use serde::{Deserialize, Serialize};

/// Sentinel cost returned above a capped table ("unaffordable").
pub const UNAFFORDABLE_COST: i32 = 1000;

/// How values above the last table entry are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutOfRangePolicy {
    /// Every value above the table costs the same large constant.
    Sentinel { cost: i32 },
    /// `last + k` costs `cost(last) + base^(k + 1)`.
    Exponential { base: i32 },
}

impl Default for OutOfRangePolicy {
    fn default() -> Self {
        Self::Sentinel {
            cost: UNAFFORDABLE_COST,
        }
    }
}

/// Cumulative point cost per attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTable {
    first_value: i32,
    costs: Vec<i32>,
    #[serde(default)]
    above: OutOfRangePolicy,
}

impl CostTable {
    /// Create a table where `costs[i]` is the cost of `first_value + i`.
    pub fn new(first_value: i32, costs: Vec<i32>, above: OutOfRangePolicy) -> Self {
        Self {
            first_value,
            costs,
            above,
        }
    }

    /// Table capped with [`UNAFFORDABLE_COST`] above its last entry.
    pub fn capped(first_value: i32, costs: Vec<i32>) -> Self {
        Self::new(first_value, costs, OutOfRangePolicy::default())
    }

    pub fn first_value(&self) -> i32 {
        self.first_value
    }

    /// Highest value with an explicit entry, or `None` for an empty table.
    pub fn last_value(&self) -> Option<i32> {
        let len = i32::try_from(self.costs.len()).ok()?;
        if len == 0 {
            return None;
        }
        self.first_value.checked_add(len - 1)
    }

    pub fn costs(&self) -> &[i32] {
        &self.costs
    }

    pub fn above(&self) -> OutOfRangePolicy {
        self.above
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Cost of `value`, or `None` if the extrapolated cost overflows `i32`.
    pub fn checked_cost(&self, value: i32) -> Option<i32> {
        if value < self.first_value {
            return Some(0);
        }
        let offset = usize::try_from(i64::from(value) - i64::from(self.first_value)).ok()?;
        if let Some(cost) = self.costs.get(offset) {
            return Some(*cost);
        }

        let last = self.costs.last().copied().unwrap_or(0);
        match self.above {
            OutOfRangePolicy::Sentinel { cost } => Some(cost),
            OutOfRangePolicy::Exponential { base } => {
                // offset >= len here, so `extra` is at least 1
                let extra = offset - self.costs.len() + 1;
                let exponent = u32::try_from(extra + 1).ok()?;
                base.checked_pow(exponent)
                    .and_then(|surcharge| last.checked_add(surcharge))
            }
        }
    }

    /// Cost of `value`; overflowing extrapolations saturate at `i32::MAX`.
    pub fn cost(&self, value: i32) -> i32 {
        self.checked_cost(value).unwrap_or(i32::MAX)
    }
}
