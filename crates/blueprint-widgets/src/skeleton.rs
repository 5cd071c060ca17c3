//! Skeleton: loading placeholder shapes.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, WidgetDescriptor};

use crate::fr;

/// The skeleton descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Skeleton", fr("Shadcn UI Skeleton", "Squelette Shadcn UI"))
        .with_icon("loader")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Variant", "Variante"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default rectangle", "Rectangle par défaut"))
                .with_choice("circle", fr("Circle/Avatar", "Cercle/Avatar"))
                .with_choice("text", fr("Text line", "Ligne de texte"))
                .with_choice("button", fr("Button", "Bouton"))
                .with_choice("card", fr("Card", "Carte"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::length("width")
                .with_label(fr("Width", "Largeur"))
                .with_section(Section::Style)
                .with_default("100%")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::length("height")
                .with_label(fr("Height", "Hauteur"))
                .with_section(Section::Style)
                .with_default("20px")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("animated")
                .with_label(fr("Pulse animation", "Animation pulsation"))
                .with_section(Section::Settings)
                .with_default(true)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::length("borderRadius")
                .with_label(fr("Border radius", "Rayon des bordures"))
                .with_section(Section::Style)
                .with_default("4px")
                .bindable(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content};
    use serde_json::json;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn length_defaults_survive_resolution() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        assert_eq!(view.get("width").unwrap().value, json!("100%"));
        assert_eq!(view.get("borderRadius").unwrap().value, json!("4px"));
    }
}
