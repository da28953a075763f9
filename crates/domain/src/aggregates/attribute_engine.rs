//! AttributeEngine - owned point-buy state
//!
//! The engine owns the registered cost systems, the active one, and the six
//! attribute values. Callers never write values directly; they request deltas,
//! resets or restores and get the outcome back, while subscribed observers
//! receive an [`AttributeEvent`] for every visible change.
//!
//! # Invariants
//!
//! - Every value lies within the active system's `[min_value, max_value]`.
//! - Deltas, resets and randomization never leave `remaining_budget() < 0`
//!   when they start from a set within budget.
//! - Switching systems only clamps. A clamped set, like a restored draft, may
//!   overspend; increases are then refused until points are freed.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::distribution::random_distribution;
use crate::draft::AttributeDraft;
use crate::error::PointBuyError;
use crate::events::{
    AttributeEvent, AttributeObserver, DeltaOutcome, ObserverId, Observers, ResetReason,
};
use crate::game_systems::{builtin_systems, custom, DEFAULT_SYSTEM_ID};
use crate::value_objects::{neutral_value, Attribute, AttributeSet, CostSystem};

/// Point-buy budget engine.
#[derive(Debug)]
pub struct AttributeEngine {
    systems: Vec<CostSystem>,
    active: CostSystem,
    attributes: AttributeSet,
    observers: Observers,
}

impl AttributeEngine {
    /// Create an engine with a single registered and active system.
    /// Attributes start at the system's minimum.
    pub fn new(system: CostSystem) -> Result<Self, PointBuyError> {
        system.validate()?;
        let attributes = AttributeSet::uniform(system.min_value());
        Ok(Self {
            systems: vec![system.clone()],
            active: system,
            attributes,
            observers: Observers::default(),
        })
    }

    /// Create an engine with every built-in system registered and
    /// [`DEFAULT_SYSTEM_ID`] active.
    pub fn with_builtin_systems() -> Result<Self, PointBuyError> {
        let mut builtins = builtin_systems();
        let default_index = builtins
            .iter()
            .position(|s| s.id() == DEFAULT_SYSTEM_ID)
            .ok_or_else(|| PointBuyError::unknown_system(DEFAULT_SYSTEM_ID))?;
        let mut engine = Self::new(builtins.remove(default_index))?;
        for system in builtins {
            engine.register_system(system)?;
        }
        Ok(engine)
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn active_system(&self) -> &CostSystem {
        &self.active
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn value(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    /// Look up a registered system by id.
    pub fn system(&self, system_id: &str) -> Option<&CostSystem> {
        self.systems.iter().find(|s| s.id() == system_id)
    }

    /// Registered systems in registration order.
    pub fn systems(&self) -> &[CostSystem] {
        &self.systems
    }

    pub fn system_ids(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.id()).collect()
    }

    /// Points spent on the current attributes.
    pub fn spent_points(&self) -> i32 {
        self.active.total_cost(&self.attributes)
    }

    /// `point_budget - Σ cost(value)` under the active system.
    pub fn remaining_budget(&self) -> i32 {
        self.active.remaining(&self.attributes)
    }

    /// Whether a +1 on `attribute` would be accepted right now.
    pub fn can_increase(&self, attribute: Attribute) -> bool {
        let value = self.value(attribute);
        value < self.active.max_value()
            && self.active.step_cost(value, value + 1) <= self.remaining_budget()
    }

    /// Whether a -1 on `attribute` would be accepted right now.
    pub fn can_decrease(&self, attribute: Attribute) -> bool {
        self.value(attribute) > self.active.min_value()
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Observers
    // ──────────────────────────────────────────────────────────────────────────

    pub fn subscribe(&mut self, observer: impl AttributeObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ──────────────────────────────────────────────────────────────────────────
    // System management
    // ──────────────────────────────────────────────────────────────────────────

    /// Add or replace a cost system. Replacing the active system applies the
    /// new bounds and budget immediately.
    pub fn register_system(&mut self, system: CostSystem) -> Result<(), PointBuyError> {
        if let Err(err) = system.validate() {
            tracing::warn!(system_id = system.id(), error = %err, "Rejected cost system");
            return Err(err);
        }

        match self.systems.iter_mut().find(|s| s.id() == system.id()) {
            Some(existing) => *existing = system.clone(),
            None => self.systems.push(system.clone()),
        }
        tracing::debug!(system_id = system.id(), "Registered cost system");

        if system.id() == self.active.id() {
            self.activate(system);
        }
        Ok(())
    }

    /// Re-register the custom system with new bounds and budget.
    pub fn configure_custom(
        &mut self,
        min_value: i32,
        max_value: i32,
        point_budget: i32,
    ) -> Result<(), PointBuyError> {
        self.register_system(custom(min_value, max_value, point_budget))
    }

    /// Switch the active system, clamping values into its bounds.
    ///
    /// Values are never reset or lowered to fit the new budget. Returns the
    /// remaining budget under the new system, which may be negative.
    pub fn select_system(&mut self, system_id: &str) -> Result<i32, PointBuyError> {
        let system = self
            .system(system_id)
            .cloned()
            .ok_or_else(|| PointBuyError::unknown_system(system_id))?;
        self.activate(system);
        Ok(self.remaining_budget())
    }

    fn activate(&mut self, system: CostSystem) {
        let previous = self.active.id().to_string();
        self.active = system;
        self.attributes = self.active.clamp_set(&self.attributes);

        tracing::info!(
            from = %previous,
            to = self.active.id(),
            remaining = self.remaining_budget(),
            "Selected cost system"
        );
        self.observers.emit(&AttributeEvent::SystemSelected {
            system_id: self.active.id().to_string(),
            attributes: self.attributes,
            remaining_budget: self.remaining_budget(),
        });
    }

    /// Clamp into bounds, then shed points until the budget holds.
    fn fit_to_budget(&self, attributes: AttributeSet) -> AttributeSet {
        let mut fitted = self.active.clamp_set(&attributes);
        while self.active.remaining(&fitted) < 0 {
            // Lower the most expensive attribute; ties go to sheet order
            let Some(attribute) = Attribute::ALL
                .iter()
                .copied()
                .filter(|a| fitted.get(*a) > self.active.min_value())
                .max_by_key(|a| (self.active.cost(fitted.get(*a)), Reverse(a.index())))
            else {
                break;
            };
            fitted.set(attribute, fitted.get(attribute) - 1);
        }
        if fitted != attributes {
            tracing::debug!(
                system_id = self.active.id(),
                before = ?attributes.to_array(),
                after = ?fitted.to_array(),
                "Lowered attributes to fit the point budget"
            );
        }
        fitted
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Attribute mutation
    // ──────────────────────────────────────────────────────────────────────────

    /// Move `attribute` by `step`, one unit at a time.
    ///
    /// Upward units need both headroom below `max_value` and enough remaining
    /// points; downward units only need to stay at or above `min_value`. The
    /// walk stops at the first refused unit and keeps what was accepted, so a
    /// +5 with two affordable units applies two.
    pub fn apply_delta(&mut self, attribute: Attribute, step: i32) -> DeltaOutcome {
        let previous_value = self.value(attribute);
        let direction = step.signum();
        let mut value = previous_value;
        let mut remaining = self.remaining_budget();
        let mut applied = 0i32;

        for _ in 0..step.unsigned_abs() {
            let Some(candidate) = value.checked_add(direction) else {
                break;
            };
            if !self.active.contains(candidate) {
                break;
            }
            let marginal = self.active.step_cost(value, candidate);
            if direction > 0 && remaining < marginal {
                break;
            }
            value = candidate;
            remaining = remaining.saturating_sub(marginal);
            applied += direction;
        }

        if applied != 0 {
            self.attributes.set(attribute, value);
        }
        let outcome = DeltaOutcome {
            attribute,
            requested: step,
            applied,
            previous_value,
            value,
            remaining_budget: self.remaining_budget(),
        };

        if outcome.changed() {
            tracing::debug!(
                %attribute,
                step,
                applied,
                value,
                remaining = outcome.remaining_budget,
                "Applied attribute delta"
            );
            self.observers.emit(&AttributeEvent::AttributeChanged {
                attribute,
                value,
                remaining_budget: outcome.remaining_budget,
            });
        } else if outcome.is_rejected() {
            tracing::debug!(%attribute, step, value, "Attribute delta rejected");
        }
        outcome
    }

    /// [`apply_delta`](Self::apply_delta) with the attribute given by name
    /// ("strength", "STR", ...).
    pub fn apply_delta_by_name(
        &mut self,
        attribute: &str,
        step: i32,
    ) -> Result<DeltaOutcome, PointBuyError> {
        let attribute: Attribute = attribute.parse()?;
        Ok(self.apply_delta(attribute, step))
    }

    /// Every attribute to the active system's minimum.
    pub fn reset_to_minimum(&mut self) -> &AttributeSet {
        let minimum = AttributeSet::uniform(self.active.min_value());
        self.replace_all(minimum, ResetReason::Minimum)
    }

    /// Every attribute to the lowest in-range score with a +0 modifier
    /// (usually 10), shedding points if that overspends the budget.
    pub fn reset_to_default(&mut self) -> &AttributeSet {
        let neutral = neutral_value(self.active.min_value(), self.active.max_value());
        let fitted = self.fit_to_budget(AttributeSet::uniform(neutral));
        self.replace_all(fitted, ResetReason::Default)
    }

    /// Replace the attributes with a random valid distribution and return it.
    pub fn generate_random_valid_distribution<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> AttributeSet {
        let distribution = random_distribution(&self.active, rng);
        tracing::info!(
            system_id = self.active.id(),
            profile = ?distribution.profile,
            "Randomized attributes"
        );
        *self.replace_all(distribution.attributes, ResetReason::Random)
    }

    fn replace_all(&mut self, attributes: AttributeSet, reason: ResetReason) -> &AttributeSet {
        self.attributes = attributes;
        self.observers.emit(&AttributeEvent::AttributesReset {
            reason,
            attributes: self.attributes,
            remaining_budget: self.remaining_budget(),
        });
        &self.attributes
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Drafts
    // ──────────────────────────────────────────────────────────────────────────

    /// Capture the active system id and values.
    pub fn snapshot(&self, now: DateTime<Utc>) -> AttributeDraft {
        AttributeDraft::new(self.active.id(), self.attributes, now)
    }

    /// Select the draft's system and seed its values without cost checks.
    ///
    /// Values are still clamped into the system's bounds. The remaining
    /// budget may be negative afterwards; further increases will be refused
    /// until points are freed.
    pub fn restore(&mut self, draft: &AttributeDraft) -> Result<&AttributeSet, PointBuyError> {
        let system = self
            .system(draft.system_id())
            .cloned()
            .ok_or_else(|| PointBuyError::unknown_system(draft.system_id()))?;
        let seeded = system.clamp_set(draft.attributes());
        if seeded != *draft.attributes() {
            tracing::warn!(
                system_id = system.id(),
                draft = ?draft.attributes().to_array(),
                clamped = ?seeded.to_array(),
                "Draft values outside system bounds were clamped"
            );
        }
        self.active = system;

        let remaining = self.active.remaining(&seeded);
        if remaining < 0 {
            tracing::warn!(
                system_id = self.active.id(),
                remaining,
                "Restored draft overspends the point budget"
            );
        }
        tracing::info!(
            system_id = self.active.id(),
            saved_at = %draft.saved_at(),
            "Restored attribute draft"
        );
        Ok(self.replace_all(seeded, ResetReason::Restored))
    }
}
