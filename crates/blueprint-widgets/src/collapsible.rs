//! Collapsible: single expandable region behind a trigger.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

use crate::fr;

/// The collapsible descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Collapsible", fr("Collapsible", "Repliable"))
        .with_icon("chevron-down")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::text("triggerText")
                        .with_label(fr("Trigger text", "Texte du déclencheur"))
                        .with_default("Click to expand")
                        .bindable(),
                    PropertyDescriptor::long_text("defaultContent")
                        .with_label(fr("Content text", "Texte du contenu"))
                        .with_default("This is the collapsible content.")
                        .bindable(),
                    PropertyDescriptor::on_off("defaultOpen")
                        .with_label(fr("Open by default", "Ouvert par défaut"))
                        .with_section(Section::Settings)
                        .with_default(false)
                        .bindable(),
                    PropertyDescriptor::select("triggerVariant")
                        .with_label(fr("Trigger variant", "Variante du déclencheur"))
                        .with_section(Section::Style)
                        .with_choice("default", fr("Default", "Par défaut"))
                        .with_choice("outline", fr("Outline", "Contour"))
                        .with_choice("ghost", fr("Ghost", "Fantôme"))
                        .with_default("default")
                        .bindable(),
                    PropertyDescriptor::select("animation")
                        .with_label(fr("Animation", "Animation"))
                        .with_section(Section::Style)
                        .with_choice("slide", fr("Slide", "Glissement"))
                        .with_choice("fade", fr("Fade", "Fondu"))
                        .with_choice("scale", fr("Scale", "Echelle"))
                        .with_default("slide")
                        .bindable(),
                    PropertyDescriptor::on_off("disabled")
                        .with_label(fr("Disabled", "Désactivé"))
                        .with_section(Section::Settings)
                        .with_default(false)
                        .bindable(),
                ],
            )
            .with_label(fr("Configuration", "Configuration"))
            .with_section(Section::Settings)
            .bindable()
            .with_default(json!({
                "triggerText": "Click to expand",
                "defaultContent": "This is the collapsible content.",
                "defaultOpen": false,
                "disabled": false,
                "triggerVariant": "default",
                "animation": "slide",
            })),
        )
        .with_trigger_event(
            TriggerEvent::new("trigger-event", fr("On toggle", "Au basculement")).as_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn default_event_is_toggle() {
        let widget = descriptor();
        let event = widget.trigger_events().default_event().unwrap();
        assert_eq!(event.name(), "trigger-event");
    }
}
