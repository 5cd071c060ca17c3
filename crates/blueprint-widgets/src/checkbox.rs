//! Checkbox: binary choice with indeterminate support.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The checkbox descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Checkbox", fr("Shadcn UI Checkbox", "Case à Cocher Shadcn UI"))
        .with_icon("check-square")
        .with_property(
            PropertyDescriptor::text("label")
                .with_label(fr("Checkbox label", "Label de la case"))
                .bindable()
                .with_default("Accept terms and conditions"),
        )
        .with_property(
            PropertyDescriptor::on_off("checked")
                .with_label(fr("Checked state", "État coché"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("indeterminate")
                .with_label(fr("Indeterminate state", "État indéterminé"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled", "Désactivée"))
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
            PropertyDescriptor::select("size")
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small (16px)", "Petit (16px)"))
                .with_choice("default", fr("Default (20px)", "Par défaut (20px)"))
                .with_choice("lg", fr("Large (24px)", "Grand (24px)"))
                .with_default("default")
                .bindable(),
        )
        .with_trigger_event(
            TriggerEvent::new("change", fr("On change", "Au changement")).as_default(),
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
    fn defaults_fill_absent_content() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        assert_eq!(view.get("checked").unwrap().value, json!(false));
        assert_eq!(view.get("size").unwrap().value, json!("default"));
    }
}
