//! CostSystem - a named point-buy rule set
//!
//! Bounds, budget and a [`CostTable`]. Validation happens in
//! [`CostSystem::validate`], which the engine runs on registration.

use serde::{Deserialize, Serialize};

use super::{AttributeSet, CostTable};
use crate::error::PointBuyError;

/// Named point-buy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSystem {
    id: String,
    display_name: String,
    min_value: i32,
    max_value: i32,
    point_budget: i32,
    table: CostTable,
}

impl CostSystem {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        min_value: i32,
        max_value: i32,
        point_budget: i32,
        table: CostTable,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            min_value,
            max_value,
            point_budget,
            table,
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn point_budget(&self) -> i32 {
        self.point_budget
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Builder-style methods (consume self, return new instance)
    // ──────────────────────────────────────────────────────────────────────────

    pub fn with_bounds(self, min_value: i32, max_value: i32) -> Self {
        Self {
            min_value,
            max_value,
            ..self
        }
    }

    pub fn with_budget(self, point_budget: i32) -> Self {
        Self {
            point_budget,
            ..self
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Cost calculation
    // ──────────────────────────────────────────────────────────────────────────

    /// Cumulative cost of a single attribute value.
    pub fn cost(&self, value: i32) -> i32 {
        self.table.cost(value)
    }

    /// Marginal cost of moving one attribute from `from` to `to`.
    pub fn step_cost(&self, from: i32, to: i32) -> i32 {
        self.cost(to).saturating_sub(self.cost(from))
    }

    /// Total cost of a full attribute set.
    pub fn total_cost(&self, attributes: &AttributeSet) -> i32 {
        attributes
            .iter()
            .fold(0i32, |acc, (_, value)| acc.saturating_add(self.cost(value)))
    }

    /// Points left after paying for `attributes`. May be negative for sets
    /// that were seeded without cost checks.
    pub fn remaining(&self, attributes: &AttributeSet) -> i32 {
        self.point_budget.saturating_sub(self.total_cost(attributes))
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    /// Clamp a value into `[min_value, max_value]`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min_value, self.max_value)
    }

    /// Clamp every attribute into bounds.
    pub fn clamp_set(&self, attributes: &AttributeSet) -> AttributeSet {
        AttributeSet::from_array(attributes.to_array().map(|v| self.clamp(v)))
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Validation
    // ──────────────────────────────────────────────────────────────────────────

    /// Check the bounds and budget.
    ///
    /// Cost tables need no checking: values below a table are free and values
    /// above it are priced by its out-of-range policy, saturating on overflow.
    /// The one extra rule is that six attributes at `min_value` must fit the
    /// budget, or [`AttributeEngine::reset_to_minimum`] would overspend.
    ///
    /// [`AttributeEngine::reset_to_minimum`]: crate::AttributeEngine::reset_to_minimum
    pub fn validate(&self) -> Result<(), PointBuyError> {
        let fail = |reason: String| Err(PointBuyError::invalid_config(&self.id, reason));

        if self.min_value > self.max_value {
            return fail(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            ));
        }
        if self.point_budget < 0 {
            return fail(format!("point_budget {} is negative", self.point_budget));
        }

        let floor_cost = i64::from(self.cost(self.min_value)) * i64::from(AttributeSet::LEN);
        if floor_cost > i64::from(self.point_budget) {
            return fail(format!(
                "six attributes at {} cost {} which exceeds the budget of {}",
                self.min_value, floor_cost, self.point_budget
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{OutOfRangePolicy, UNAFFORDABLE_COST};

    fn sample() -> CostSystem {
        CostSystem::new(
            "dnd5e",
            "D&D 5e",
            8,
            15,
            27,
            CostTable::capped(8, vec![0, 1, 2, 3, 4, 5, 7, 9]),
        )
    }

    #[test]
    fn sample_system_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn total_cost_sums_all_six() {
        let system = sample();
        let set = AttributeSet::from_array([15, 14, 13, 12, 10, 8]);
        assert_eq!(system.total_cost(&set), 9 + 7 + 5 + 4 + 2);
        assert_eq!(system.remaining(&set), 0);
    }

    #[test]
    fn step_cost_is_marginal() {
        let system = sample();
        assert_eq!(system.step_cost(13, 14), 2);
        assert_eq!(system.step_cost(14, 13), -2);
    }

    #[test]
    fn clamp_set_respects_bounds() {
        let system = sample();
        let clamped = system.clamp_set(&AttributeSet::from_array([18, 3, 10, 15, 8, 16]));
        assert_eq!(clamped.to_array(), [15, 8, 10, 15, 8, 15]);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = sample().with_bounds(16, 15).validate().unwrap_err();
        assert!(matches!(err, PointBuyError::InvalidSystemConfig { .. }));
    }

    #[test]
    fn rejects_negative_budget() {
        let err = sample().with_budget(-1).validate().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn accepts_zero_budget() {
        assert!(sample().with_budget(0).validate().is_ok());
    }

    #[test]
    fn capped_table_shorter_than_max_is_accepted() {
        let system = sample().with_bounds(8, 17);
        assert!(system.validate().is_ok());
        // 16 and 17 carry the unaffordable sentinel
        assert_eq!(system.cost(16), UNAFFORDABLE_COST);
        assert_eq!(system.step_cost(15, 16), UNAFFORDABLE_COST - 9);
    }

    #[test]
    fn empty_id_and_empty_table_are_accepted() {
        let system = CostSystem::new("", "Blank", 8, 15, 27, CostTable::capped(9, Vec::new()));
        assert!(system.validate().is_ok());
        assert_eq!(system.cost(8), 0);
        assert_eq!(system.cost(9), UNAFFORDABLE_COST);
    }

    #[test]
    fn rejects_minimum_allocation_over_budget() {
        // Each attribute at 10 costs 2, twelve points for six, budget is 10
        let system = sample().with_bounds(10, 15).with_budget(10);
        let err = system.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds the budget"));
    }

    #[test]
    fn overflowing_extrapolation_saturates() {
        let system = CostSystem::new(
            "huge",
            "Huge",
            8,
            60,
            27,
            CostTable::new(8, vec![0, 1], OutOfRangePolicy::Exponential { base: 2 }),
        );
        assert!(system.validate().is_ok());
        assert_eq!(system.cost(60), i32::MAX);
        let maxed = AttributeSet::uniform(60);
        assert_eq!(system.total_cost(&maxed), i32::MAX);
    }
}
