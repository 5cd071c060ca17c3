//! Radio group: exclusive choice among configurable options.

use blueprint_core::{
    PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

/// The radio-group descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("RadioGroup", fr("Radio Group", "Groupe Radio"))
        .with_icon("radio-button-on")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::array(
                        "options",
                        PropertySchema::Record(vec![
                            PropertyDescriptor::text("value")
                                .with_label(fr("Value", "Valeur"))
                                .bindable(),
                            PropertyDescriptor::text("label")
                                .with_label(fr("Label", "Libellé"))
                                .bindable(),
                            PropertyDescriptor::text("description")
                                .with_label(fr("Description", "Description"))
                                .bindable(),
                            PropertyDescriptor::on_off("disabled")
                                .with_label(fr("Disabled", "Désactivé"))
                                .with_default(false)
                                .bindable(),
                        ]),
                    )
                    .with_label(fr("Options", "Options"))
                    .bindable()
                    .with_default(json!([
                        { "value": "option1", "label": "Option 1" },
                        { "value": "option2", "label": "Option 2" },
                        { "value": "option3", "label": "Option 3" },
                    ])),
                    PropertyDescriptor::select("orientation")
                        .with_label(fr("Orientation", "Orientation"))
                        .with_section(Section::Style)
                        .with_choice("vertical", fr("Vertical", "Verticale"))
                        .with_choice("horizontal", fr("Horizontal", "Horizontale"))
                        .with_default("vertical"),
                    PropertyDescriptor::select("size")
                        .with_label(fr("Size", "Taille"))
                        .with_section(Section::Style)
                        .with_choice("sm", fr("Small", "Petit"))
                        .with_choice("default", fr("Default", "Par défaut"))
                        .with_choice("lg", fr("Large", "Grand"))
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
                "options": [
                    { "value": "option1", "label": "Option 1" },
                    { "value": "option2", "label": "Option 2" },
                    { "value": "option3", "label": "Option 3" },
                ],
                "orientation": "vertical",
                "size": "default",
                "disabled": false,
                "defaultValue": null,
            })),
        )
        .with_trigger_event(
            TriggerEvent::new("trigger-event", fr("On change", "Au changement")).as_default(),
        )
}
