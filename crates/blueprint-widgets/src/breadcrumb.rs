//! Breadcrumb: a navigation trail with optional middle-collapse.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, PropertySchema, Section, TriggerEvent, VisibilityRule,
    WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

// itemsBeforeCollapse / itemsAfterCollapse only matter once a limit is set.
fn collapse_inactive() -> VisibilityRule {
    VisibilityRule::any_of([
        VisibilityRule::falsy("maxItems"),
        VisibilityRule::eq("maxItems", 0),
    ])
}

/// The breadcrumb descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Breadcrumb", fr("Shadcn UI Breadcrumb", "Fil d'Ariane Shadcn UI"))
        .with_icon("navigation")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_style_order([["separator"]])
        .with_settings_order([
            "items",
            "maxItems",
            "itemsBeforeCollapse",
            "itemsAfterCollapse",
            "separator",
        ])
        .with_property(
            PropertyDescriptor::array(
                "items",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("label").with_label(fr("Label", "Libellé")),
                    PropertyDescriptor::text("href").with_label(fr("Link URL", "URL du lien")),
                    PropertyDescriptor::on_off("isCurrentPage")
                        .with_label(fr("Current page", "Page actuelle")),
                ]),
            )
            .with_label(fr("Breadcrumb items", "Éléments du fil d'Ariane"))
            .bindable()
            .with_default(json!([
                { "label": "Home", "href": "/", "isCurrentPage": false },
                { "label": "Category", "href": "/category", "isCurrentPage": false },
                { "label": "Current Page", "href": "", "isCurrentPage": true },
            ])),
        )
        .with_property(
            PropertyDescriptor::number("maxItems")
                .with_label(fr("Max items (0 = unlimited)", "Nombre max d'éléments (0 = illimité)"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(0),
        )
        .with_property(
            PropertyDescriptor::number("itemsBeforeCollapse")
                .with_label(fr("Items before collapse", "Éléments avant réduction"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(1)
                .hidden_when(collapse_inactive()),
        )
        .with_property(
            PropertyDescriptor::number("itemsAfterCollapse")
                .with_label(fr("Items after collapse", "Éléments après réduction"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(1)
                .hidden_when(collapse_inactive()),
        )
        .with_property(
            PropertyDescriptor::select("separator")
                .with_label(fr("Separator", "Séparateur"))
                .with_section(Section::Style)
                .with_choice("chevron", fr("Chevron (>)", "Chevron (>)"))
                .with_choice("slash", fr("Slash (/)", "Barre oblique (/)"))
                .with_choice("dash", fr("Dash (-)", "Tiret (-)"))
                .with_choice("dot", fr("Dot (•)", "Point (•)"))
                .with_default("chevron")
                .bindable(),
        )
        .with_trigger_event(TriggerEvent::new("click", fr("On click", "Au clic")).as_default())
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
    fn collapse_counts_hidden_when_unlimited() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("maxItems".into(), json!(0));
        let view = resolve(&widget, &content);
        assert!(!view.get("itemsBeforeCollapse").unwrap().visible);
        assert!(!view.get("itemsAfterCollapse").unwrap().visible);
    }

    #[test]
    fn collapse_counts_visible_with_limit() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("maxItems".into(), json!(4));
        let view = resolve(&widget, &content);
        assert!(view.get("itemsBeforeCollapse").unwrap().visible);
        assert_eq!(view.get("itemsBeforeCollapse").unwrap().value, json!(1));
    }

    #[test]
    fn items_carry_nested_views() {
        use blueprint_core::ResolvedChildren;
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        let Some(ResolvedChildren::Items(items)) = &view.get("items").unwrap().children else {
            panic!("expected per-element views");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].get("isCurrentPage").unwrap().value, json!(true));
    }
}
