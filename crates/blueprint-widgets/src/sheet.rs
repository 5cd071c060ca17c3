//! Sheet: sliding side panel with form fields and action buttons.

use blueprint_core::{
    PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

fn class_hook(key: &str, label: &str) -> PropertyDescriptor {
    PropertyDescriptor::text(key)
        .with_label(label)
        .with_section(Section::Style)
        .bindable()
        .with_default("")
}

/// The sheet descriptor.
///
/// Neither of its two events is marked default; the editor offers both on
/// equal footing.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Sheet", "Shadcn Sheet")
        .with_icon("border-outer")
        .with_property(
            PropertyDescriptor::on_off("open")
                .with_label("Open")
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("side")
                .with_label("Side")
                .with_section(Section::Settings)
                .with_choice("top", "Top")
                .with_choice("right", "Right")
                .with_choice("bottom", "Bottom")
                .with_choice("left", "Left")
                .with_default("right"),
        )
        .with_property(
            PropertyDescriptor::text("title")
                .with_label("Title")
                .bindable()
                .multilang()
                .with_default("Sheet Title"),
        )
        .with_property(
            PropertyDescriptor::text("description")
                .with_label("Description")
                .bindable()
                .multilang()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::rich_text("content")
                .with_label("Content")
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::on_off("showHeader")
                .with_label("Show Header")
                .with_section(Section::Layout)
                .with_default(true),
        )
        .with_property(
            PropertyDescriptor::on_off("showClose")
                .with_label("Show Close Button")
                .with_section(Section::Layout)
                .with_default(true),
        )
        .with_property(
            PropertyDescriptor::on_off("showFooter")
                .with_label("Show Footer")
                .with_section(Section::Layout)
                .with_default(true),
        )
        .with_property(
            PropertyDescriptor::text("closeLabel")
                .with_label("Close Label")
                .bindable()
                .multilang()
                .with_default("Close"),
        )
        .with_property(
            PropertyDescriptor::on_off("closeOnBackdrop")
                .with_label("Close on Backdrop Click")
                .with_section(Section::Behavior)
                .with_default(true),
        )
        .with_property(
            PropertyDescriptor::on_off("closeOnEscape")
                .with_label("Close on Escape")
                .with_section(Section::Behavior)
                .with_default(true),
        )
        .with_property(
            PropertyDescriptor::array(
                "fields",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("id").with_label("Field ID"),
                    PropertyDescriptor::text("label").with_label("Label"),
                    PropertyDescriptor::select("type")
                        .with_label("Type")
                        .with_choice("text", "Text")
                        .with_choice("email", "Email")
                        .with_choice("password", "Password")
                        .with_choice("textarea", "Textarea")
                        .with_choice("select", "Select")
                        .with_choice("checkbox", "Checkbox"),
                    PropertyDescriptor::text("placeholder").with_label("Placeholder"),
                    PropertyDescriptor::on_off("required").with_label("Required"),
                    PropertyDescriptor::on_off("disabled").with_label("Disabled"),
                    PropertyDescriptor::text("value").with_label("Default Value"),
                ]),
            )
            .with_label("Fields")
            .with_section(Section::Form)
            .bindable()
            .with_default(json!([])),
        )
        .with_property(
            PropertyDescriptor::array(
                "actions",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("id").with_label("Action ID"),
                    PropertyDescriptor::text("label").with_label("Button Label"),
                    PropertyDescriptor::select("variant")
                        .with_label("Variant")
                        .with_choice("default", "Default")
                        .with_choice("destructive", "Destructive")
                        .with_choice("outline", "Outline")
                        .with_choice("secondary", "Secondary")
                        .with_choice("ghost", "Ghost")
                        .with_choice("link", "Link"),
                    PropertyDescriptor::on_off("disabled").with_label("Disabled"),
                    PropertyDescriptor::on_off("closeSheet").with_label("Close Sheet on Click"),
                ]),
            )
            .with_label("Actions")
            .with_section(Section::Actions)
            .bindable()
            .with_default(json!([
                { "id": "cancel", "label": "Cancel", "variant": "outline", "closeSheet": true },
                { "id": "save", "label": "Save", "variant": "default", "closeSheet": true },
            ])),
        )
        .with_property(class_hook("customClass", "Custom Panel Class"))
        .with_property(class_hook("contentClass", "Custom Content Class"))
        .with_property(class_hook("footerClass", "Custom Footer Class"))
        .with_trigger_event(TriggerEvent::new("close", "On Close"))
        .with_trigger_event(TriggerEvent::new("action-click", "On Action Click"))
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
    fn no_event_is_marked_default() {
        let widget = descriptor();
        assert_eq!(widget.trigger_events().len(), 2);
        assert!(widget.trigger_events().default_event().is_none());
    }

    #[test]
    fn default_actions_resolve_as_items() {
        let widget = descriptor();
        let view = resolve(&widget, &Content::new());
        match view.get("actions").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].get("id").unwrap().value, json!("save"));
            }
            other => panic!("expected list items, got {other:?}"),
        }
    }

    #[test]
    fn title_carries_multilang() {
        let widget = descriptor();
        assert!(widget.property("title").unwrap().is_multilang());
        assert!(!widget.property("content").unwrap().is_multilang());
    }
}
