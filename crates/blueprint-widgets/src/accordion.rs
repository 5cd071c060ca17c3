//! Accordion: expandable sections, one-at-a-time or many-open.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, PropertyKind, PropertySchema, Section, TriggerEvent,
    VisibilityRule, WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

/// The accordion descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Accordion", fr("Shadcn UI Accordion", "Accordéon Shadcn UI"))
        .with_icon("view-list")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_style_order([vec!["type", "collapsible"], vec!["defaultOpenItems"]])
        .with_settings_order(["items", "type", "collapsible", "defaultOpenItems"])
        .with_property(
            PropertyDescriptor::array(
                "items",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("title").with_label(fr("Title", "Titre")),
                    PropertyDescriptor::text("content").with_label(fr("Content", "Contenu")),
                ]),
            )
            .with_label(fr("Accordion items", "Éléments accordéon"))
            .bindable()
            .with_default(json!([
                { "title": "Section 1", "content": "Content for section 1" },
                { "title": "Section 2", "content": "Content for section 2" },
                { "title": "Section 3", "content": "Content for section 3" },
            ])),
        )
        .with_property(
            PropertyDescriptor::select("type")
                .with_label(fr("Type", "Type"))
                .with_section(Section::Settings)
                .with_choice("single", fr("Single (one at a time)", "Simple (un à la fois)"))
                .with_choice("multiple", fr("Multiple (many open)", "Multiple (plusieurs ouverts)"))
                .with_default("single")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("collapsible")
                .with_label(fr("Collapsible", "Repliable"))
                .with_section(Section::Settings)
                .with_default(true)
                .bindable()
                .hidden_when(VisibilityRule::ne("type", "single")),
        )
        .with_property(
            PropertyDescriptor::array("defaultOpenItems", PropertySchema::Scalar(PropertyKind::Number))
                .with_label(fr("Default open items", "Éléments ouverts par défaut"))
                .with_section(Section::Settings)
                .with_default(json!([]))
                .bindable(),
        )
        .with_trigger_event(TriggerEvent::new("trigger-event", fr("On change", "Au changement")).as_default())
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
    fn collapsible_hidden_in_multiple_mode() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("type".into(), json!("multiple"));
        let view = resolve(&widget, &content);
        assert!(!view.get("collapsible").unwrap().visible);
    }

    #[test]
    fn collapsible_visible_in_single_mode() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("type".into(), json!("single"));
        let view = resolve(&widget, &content);
        assert!(view.get("collapsible").unwrap().visible);
        assert_eq!(view.get("collapsible").unwrap().value, json!(true));
    }

    #[test]
    fn default_items_resolve_per_element() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        let items = view.get("items").unwrap();
        assert_eq!(items.value.as_array().map(Vec::len), Some(3));
    }
}
