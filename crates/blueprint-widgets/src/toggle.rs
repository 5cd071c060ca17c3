//! Toggle: two-state pressed button.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The toggle descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Toggle", fr("Shadcn UI Toggle", "Bouton Toggle Shadcn UI"))
        .with_icon("toggle-left")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::on_off("pressed")
                .with_label(fr("Pressed state", "État activé"))
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
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small", "Petit"))
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("lg", fr("Large", "Grand"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Variant", "Variante"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("outline", fr("Outline", "Contour"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("text")
                .with_label(fr("Toggle text", "Texte du toggle"))
                .bindable()
                .with_default("Toggle"),
        )
        .with_trigger_event(TriggerEvent::new("change", fr("On toggle", "Au basculement")).as_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }
}
