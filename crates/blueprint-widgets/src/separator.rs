//! Separator: horizontal or vertical dividing rule.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, WidgetDescriptor};

use crate::fr;

/// The separator descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Separator", fr("Shadcn UI Separator", "Séparateur Shadcn UI"))
        .with_icon("minus")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::select("orientation")
                .with_label(fr("Orientation", "Orientation"))
                .with_section(Section::Style)
                .with_choice("horizontal", fr("Horizontal", "Horizontale"))
                .with_choice("vertical", fr("Vertical", "Verticale"))
                .with_default("horizontal")
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
