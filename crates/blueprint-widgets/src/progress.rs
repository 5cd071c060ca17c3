//! Progress: determinate progress bar.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, WidgetDescriptor};

use crate::fr;

/// The progress descriptor. Purely presentational, so it publishes no
/// trigger events.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new(
        "Progress",
        fr("Shadcn UI Progress", "Barre de progression Shadcn UI"),
    )
    .with_icon("trending-up")
    .with_editor_options(EditorOptions {
        sizable: true,
        ..EditorOptions::default()
    })
    .with_property(
        PropertyDescriptor::number("value")
            .with_label(fr("Progress value", "Valeur de progression"))
            .bindable()
            .with_default(0),
    )
    .with_property(
        PropertyDescriptor::number("max")
            .with_label(fr("Maximum value", "Valeur maximum"))
            .bindable()
            .with_default(100),
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
        PropertyDescriptor::on_off("showValue")
            .with_label(fr("Show percentage", "Afficher le pourcentage"))
            .with_section(Section::Settings)
            .with_default(false)
            .bindable(),
    )
    .with_property(
        PropertyDescriptor::on_off("animated")
            .with_label(fr("Progress animation", "Animation de progression"))
            .with_section(Section::Settings)
            .with_default(true)
            .bindable(),
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
    fn publishes_no_events() {
        assert!(descriptor().trigger_events().is_empty());
    }
}
