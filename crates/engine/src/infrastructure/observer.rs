//! Observer that mirrors engine events into the trace log.

use pointbuy_domain::{AttributeEvent, AttributeObserver};

/// Logs every engine event at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AttributeObserver for TracingObserver {
    fn notify(&self, event: &AttributeEvent) {
        match event {
            AttributeEvent::SystemSelected {
                system_id,
                remaining_budget,
                ..
            } => tracing::debug!(%system_id, remaining = remaining_budget, "System selected"),
            AttributeEvent::AttributeChanged {
                attribute,
                value,
                remaining_budget,
            } => tracing::debug!(
                %attribute,
                value,
                remaining = remaining_budget,
                "Attribute changed"
            ),
            AttributeEvent::AttributesReset {
                reason,
                remaining_budget,
                ..
            } => tracing::debug!(?reason, remaining = remaining_budget, "Attributes reset"),
        }
    }
}
