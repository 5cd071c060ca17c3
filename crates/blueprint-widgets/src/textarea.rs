//! Textarea: multi-line text entry.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::Value;

use crate::fr;

/// The textarea descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Textarea", fr("Shadcn UI Textarea", "Zone de texte Shadcn UI"))
        .with_icon("align-left")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::text("value")
                .with_label(fr("Field value", "Valeur du champ"))
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::text("placeholder")
                .with_label(fr("Placeholder", "Texte indicatif"))
                .bindable()
                .with_default("Type your message here..."),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled", "Désactivé"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("readonly")
                .with_label(fr("Read only", "Lecture seule"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("required")
                .with_label(fr("Required", "Obligatoire"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::number("rows")
                .with_label(fr("Number of rows", "Nombre de lignes"))
                .with_section(Section::Style)
                .with_default(4)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("resize")
                .with_label(fr("Resize behavior", "Comportement de redimensionnement"))
                .with_section(Section::Style)
                .with_choice("none", fr("None", "Aucun"))
                .with_choice("both", fr("Both", "Les deux"))
                .with_choice("horizontal", fr("Horizontal", "Horizontale"))
                .with_choice("vertical", fr("Vertical", "Verticale"))
                .with_default("vertical")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::number("maxLength")
                .with_label(fr("Maximum length", "Longueur maximum"))
                .with_section(Section::Settings)
                .with_default(Value::Null)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("name")
                .with_label(fr("Field name", "Nom du champ"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(""),
        )
        .with_trigger_event(TriggerEvent::new("input", fr("On input", "À la saisie")).as_default())
        .with_trigger_event(TriggerEvent::new("change", fr("On change", "Au changement")))
        .with_trigger_event(TriggerEvent::new("focus", fr("On focus", "Au focus")))
        .with_trigger_event(TriggerEvent::new("blur", fr("On blur", "À la perte de focus")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content};

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn unset_max_length_resolves_to_null() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        assert!(view.get("maxLength").unwrap().value.is_null());
    }
}
