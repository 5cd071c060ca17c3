//! Alert: an inline callout with title and description.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The alert descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Alert", fr("Shadcn UI Alert", "Alerte Shadcn UI"))
        .with_icon("exclamation-triangle")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_style_order([["variant"], ["customClasses"]])
        .with_settings_order(["title", "description", "variant", "customClasses"])
        .with_property(
            PropertyDescriptor::text("title")
                .with_label(fr("Alert title", "Titre de l'alerte"))
                .bindable()
                .with_default("Alert Title"),
        )
        .with_property(
            PropertyDescriptor::long_text("description")
                .with_label(fr("Alert description", "Description de l'alerte"))
                .bindable()
                .with_default("This is an alert description that provides additional context."),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Alert variant", "Variante d'alerte"))
                .with_section(Section::Settings)
                .with_choice("default", fr("Default (Info)", "Défaut (Info)"))
                .with_choice("destructive", fr("Destructive (Error)", "Destructive (Erreur)"))
                .with_choice("warning", fr("Warning", "Avertissement"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("customClasses")
                .with_label(fr("Custom CSS classes", "Classes CSS personnalisées"))
                .with_section(Section::Style)
                .bindable()
                .with_default(""),
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
