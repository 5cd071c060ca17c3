//! Tooltip: hover hint with placement and timing controls.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

use crate::fr;

/// The tooltip descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Tooltip", fr("Tooltip", "Info-bulle"))
        .with_icon("info-circle")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::text("text")
                        .with_label(fr("Tooltip text", "Texte de l'info-bulle"))
                        .with_default("Tooltip content"),
                    PropertyDescriptor::text("triggerText")
                        .with_label(fr("Trigger text", "Texte du déclencheur"))
                        .with_default("Hover me"),
                    PropertyDescriptor::select("side")
                        .with_label(fr("Position", "Position"))
                        .with_section(Section::Style)
                        .with_choice("top", fr("Top", "Haut"))
                        .with_choice("bottom", fr("Bottom", "Bas"))
                        .with_choice("left", fr("Left", "Gauche"))
                        .with_choice("right", fr("Right", "Droite"))
                        .with_default("top"),
                    PropertyDescriptor::select("align")
                        .with_label(fr("Alignment", "Alignement"))
                        .with_section(Section::Style)
                        .with_choice("start", fr("Start", "Début"))
                        .with_choice("center", fr("Center", "Centre"))
                        .with_choice("end", fr("End", "Fin"))
                        .with_default("center"),
                    PropertyDescriptor::number("delayDuration")
                        .with_label(fr("Show delay (ms)", "Délai d'affichage (ms)"))
                        .with_section(Section::Settings)
                        .with_default(700),
                    PropertyDescriptor::number("skipDelayDuration")
                        .with_label(fr("Hide delay (ms)", "Délai de masquage (ms)"))
                        .with_section(Section::Settings)
                        .with_default(300),
                    PropertyDescriptor::on_off("disabled")
                        .with_label(fr("Disabled", "Désactivé"))
                        .with_section(Section::Settings)
                        .with_default(false),
                ],
            )
            .with_label(fr("Configuration", "Configuration"))
            .with_section(Section::Settings)
            .bindable()
            .with_default(json!({
                "text": "Tooltip content",
                "side": "top",
                "align": "center",
                "delayDuration": 700,
                "skipDelayDuration": 300,
                "disabled": false,
            })),
        )
        .with_trigger_event(
            TriggerEvent::new("trigger-event", fr("On show", "A l'affichage")).as_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content, ResolvedChildren};
    use serde_json::json;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn timing_fields_default_from_the_record() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        match view.get("content").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Fields(inner) => {
                assert_eq!(inner.get("delayDuration").unwrap().value, json!(700));
                assert_eq!(inner.get("side").unwrap().value, json!("top"));
            }
            other => panic!("expected record fields, got {other:?}"),
        }
    }
}
