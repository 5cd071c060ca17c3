//! Toggle group: a row of toggles with single or multiple selection.

use blueprint_core::{
    PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

/// The toggle-group descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("ToggleGroup", fr("Toggle Group", "Groupe de Basculement"))
        .with_icon("toggle-right")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::select("type")
                        .with_label(fr("Selection type", "Type de sélection"))
                        .with_choice("single", fr("Single", "Simple"))
                        .with_choice("multiple", fr("Multiple", "Multiple"))
                        .with_default("single"),
                    PropertyDescriptor::array(
                        "items",
                        PropertySchema::Record(vec![
                            PropertyDescriptor::text("value").with_label(fr("Value", "Valeur")),
                            PropertyDescriptor::text("label").with_label(fr("Label", "Libellé")),
                            PropertyDescriptor::on_off("disabled")
                                .with_label(fr("Disabled", "Désactivé"))
                                .with_default(false),
                        ]),
                    )
                    .with_label(fr("Items", "Éléments"))
                    .with_default(json!([
                        { "value": "option1", "label": "Option 1" },
                        { "value": "option2", "label": "Option 2" },
                        { "value": "option3", "label": "Option 3" },
                    ])),
                    PropertyDescriptor::select("size")
                        .with_label(fr("Size", "Taille"))
                        .with_section(Section::Style)
                        .with_choice("sm", fr("Small", "Petit"))
                        .with_choice("default", fr("Default", "Par défaut"))
                        .with_choice("lg", fr("Large", "Grand"))
                        .with_default("default"),
                    PropertyDescriptor::select("variant")
                        .with_label(fr("Variant", "Variante"))
                        .with_section(Section::Style)
                        .with_choice("default", fr("Default", "Par défaut"))
                        .with_choice("outline", fr("Outline", "Contour"))
                        .with_default("default"),
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
                "type": "single",
                "size": "default",
                "variant": "default",
                "disabled": false,
                "items": [
                    { "value": "option1", "label": "Option 1" },
                    { "value": "option2", "label": "Option 2" },
                    { "value": "option3", "label": "Option 3" },
                ],
                "defaultValue": null,
            })),
        )
        .with_trigger_event(
            TriggerEvent::new("trigger-event", fr("On change", "Au changement")).as_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }
}
