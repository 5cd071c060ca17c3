//! Pagination: placeholder descriptor.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

/// The pagination descriptor. Upstream only ships a stub configuration for
/// this component, so the descriptor carries a single empty content object.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Pagination", "pagination")
        .with_icon("cube")
        .with_property(
            PropertyDescriptor::object("content", vec![])
                .with_label("Content")
                .with_section(Section::Settings)
                .bindable()
                .with_default(json!({})),
        )
        .with_trigger_event(TriggerEvent::new("click", "On Click").as_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }
}
