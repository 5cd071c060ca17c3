//! Label: caption tied to a form control.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The label descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Label", fr("Shadcn UI Label", "Label Shadcn UI"))
        .with_icon("tag")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::text("text")
                .with_label(fr("Label text", "Texte du label"))
                .bindable()
                .with_default("Label"),
        )
        .with_property(
            PropertyDescriptor::text("htmlFor")
                .with_label(fr("Associated input ID", "ID du champ associé"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::on_off("required")
                .with_label(fr("Required field", "Champ obligatoire"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small", "Petit"))
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("lg", fr("Large", "Grand"))
                .with_default("default")
                .bindable(),
        )
        .with_trigger_event(TriggerEvent::new("click", fr("On click", "Au clic")).as_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }
}
