//! Toast: placeholder notification descriptor.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

/// The toast descriptor. Upstream only ships a stub configuration for this
/// component, so the descriptor carries a single empty content object.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Toast", "toast")
        .with_icon("bell")
        .with_property(
            PropertyDescriptor::object("content", vec![])
                .with_label("Content")
                .with_section(Section::Settings)
                .bindable()
                .with_default(json!({})),
        )
        .with_trigger_event(TriggerEvent::new("click", "On Click").as_default())
}
