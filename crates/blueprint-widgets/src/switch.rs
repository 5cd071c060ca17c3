//! Switch: on/off toggle control.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The switch descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Switch", fr("Shadcn UI Switch", "Interrupteur Shadcn UI"))
        .with_icon("toggle-right")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::on_off("checked")
                .with_label(fr("Checked state", "État activé"))
                .bindable()
                .with_default(false),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled", "Désactivé"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Switch size", "Taille de l'interrupteur"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small", "Petit"))
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("lg", fr("Large", "Grand"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("name")
                .with_label(fr("Field name", "Nom du champ"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::text("value")
                .with_label(fr("Field value", "Valeur du champ"))
                .with_section(Section::Settings)
                .bindable()
                .with_default("on"),
        )
        .with_trigger_event(
            TriggerEvent::new("change", fr("On change", "Au changement")).as_default(),
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
