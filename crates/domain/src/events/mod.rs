//! Domain Events
//!
//! Change notifications emitted by the attribute engine. Front ends subscribe
//! an [`AttributeObserver`] to refresh remaining-point counters and modifier
//! displays instead of listening for DOM events.
//!
//! ## Mutation Outcomes
//!
//! The `attribute_events` submodule contains return types from engine
//! mutations, communicating what happened when state was modified.

pub mod attribute_events;

pub use attribute_events::*;

use serde::{Deserialize, Serialize};

use crate::value_objects::{Attribute, AttributeSet};

/// Why the whole attribute set was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResetReason {
    Minimum,
    Default,
    Random,
    Restored,
}

/// Engine change notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AttributeEvent {
    /// The active cost system changed (or was re-registered)
    SystemSelected {
        system_id: String,
        attributes: AttributeSet,
        remaining_budget: i32,
    },
    /// One attribute moved by at least one unit step
    AttributeChanged {
        attribute: Attribute,
        value: i32,
        remaining_budget: i32,
    },
    /// Every attribute was replaced at once
    AttributesReset {
        reason: ResetReason,
        attributes: AttributeSet,
        remaining_budget: i32,
    },
}

impl AttributeEvent {
    pub fn remaining_budget(&self) -> i32 {
        match self {
            Self::SystemSelected {
                remaining_budget, ..
            }
            | Self::AttributeChanged {
                remaining_budget, ..
            }
            | Self::AttributesReset {
                remaining_budget, ..
            } => *remaining_budget,
        }
    }
}

/// Receives engine change notifications.
#[cfg_attr(test, mockall::automock)]
pub trait AttributeObserver {
    fn notify(&self, event: &AttributeEvent);
}

impl<F> AttributeObserver for F
where
    F: Fn(&AttributeEvent),
{
    fn notify(&self, event: &AttributeEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Ordered list of subscribed observers.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn AttributeObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn AttributeObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&self, event: &AttributeEvent) {
        for (_, observer) in &self.entries {
            observer.notify(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn changed(value: i32) -> AttributeEvent {
        AttributeEvent::AttributeChanged {
            attribute: Attribute::Strength,
            value,
            remaining_budget: 27 - value,
        }
    }

    #[test]
    fn closures_are_observers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut observers = Observers::default();
        observers.subscribe(Box::new(move |event: &AttributeEvent| {
            sink.borrow_mut().push(event.remaining_budget());
        }));

        observers.emit(&changed(9));
        observers.emit(&changed(10));

        assert_eq!(*seen.borrow(), vec![18, 17]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut mock = MockAttributeObserver::new();
        mock.expect_notify().times(1).return_const(());

        let mut observers = Observers::default();
        let id = observers.subscribe(Box::new(mock));
        observers.emit(&changed(9));

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert_eq!(observers.len(), 0);
        observers.emit(&changed(10));
    }

    #[test]
    fn observer_ids_are_unique() {
        let mut observers = Observers::default();
        let a = observers.subscribe(Box::new(|_: &AttributeEvent| {}));
        let b = observers.subscribe(Box::new(|_: &AttributeEvent| {}));
        assert_ne!(a, b);
    }

    #[test]
    fn event_serializes_camel_case() {
        let json = serde_json::to_value(changed(12)).unwrap();
        assert_eq!(json["attributeChanged"]["remainingBudget"], 15);
        assert_eq!(json["attributeChanged"]["attribute"], "strength");
    }
}
