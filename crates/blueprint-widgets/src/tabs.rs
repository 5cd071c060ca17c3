//! Tabs: switchable panels with a configurable tab strip.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

/// The tabs descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Tabs", fr("Shadcn UI Tabs", "Onglets Shadcn UI"))
        .with_icon("folder-tabs")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::array(
                "tabs",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("label")
                        .with_label(fr("Tab label", "Libellé de l'onglet"))
                        .with_default("Tab"),
                    PropertyDescriptor::text("value")
                        .with_label(fr("Tab value", "Valeur de l'onglet"))
                        .with_default(""),
                    PropertyDescriptor::text("content")
                        .with_label(fr("Tab content", "Contenu de l'onglet"))
                        .with_default("Tab content"),
                    PropertyDescriptor::on_off("disabled")
                        .with_label(fr("Disabled", "Désactivé"))
                        .with_default(false),
                ]),
            )
            .with_label(fr("Tabs", "Onglets"))
            .bindable()
            .with_default(json!([
                { "label": "Tab 1", "value": "tab1", "content": "Content for tab 1", "disabled": false },
                { "label": "Tab 2", "value": "tab2", "content": "Content for tab 2", "disabled": false },
                { "label": "Tab 3", "value": "tab3", "content": "Content for tab 3", "disabled": false },
            ])),
        )
        .with_property(
            PropertyDescriptor::text("defaultValue")
                .with_label(fr("Default active tab", "Onglet actif par défaut"))
                .bindable()
                .with_default("tab1"),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Variant", "Variante"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("pills", fr("Pills", "Pilules"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("orientation")
                .with_label(fr("Orientation", "Orientation"))
                .with_section(Section::Style)
                .with_choice("horizontal", fr("Horizontal", "Horizontale"))
                .with_choice("vertical", fr("Vertical", "Verticale"))
                .with_default("horizontal")
                .bindable(),
        )
        .with_trigger_event(
            TriggerEvent::new("change", fr("On tab change", "Au changement d'onglet")).as_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content, ResolvedChildren};
    use serde_json::json;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn sparse_tab_elements_use_field_defaults() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("tabs".into(), json!([{ "value": "custom" }]));
        let view = resolve(&widget, &content);
        match view.get("tabs").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Items(items) => {
                assert_eq!(items[0].get("value").unwrap().value, json!("custom"));
                assert_eq!(items[0].get("label").unwrap().value, json!("Tab"));
                assert_eq!(items[0].get("content").unwrap().value, json!("Tab content"));
            }
            other => panic!("expected list items, got {other:?}"),
        }
    }
}
