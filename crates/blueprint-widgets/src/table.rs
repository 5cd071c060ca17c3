//! Table: tabular data with sortable columns and row selection.

use blueprint_core::{
    PropertyDescriptor, PropertyKind, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

fn class_hook(key: &str, label: &str) -> PropertyDescriptor {
    PropertyDescriptor::text(key)
        .with_label(label)
        .with_section(Section::Style)
        .bindable()
        .with_default("")
}

/// The table descriptor.
///
/// Rows and column definitions are free-shape objects; the editor leaves
/// their layout entirely to the bound data.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Table", "Shadcn Table")
        .with_icon("table")
        .with_property(
            PropertyDescriptor::array("data", PropertySchema::Scalar(PropertyKind::Object))
                .with_label("Data")
                .with_section(Section::Settings)
                .bindable()
                .with_default(json!([])),
        )
        .with_property(
            PropertyDescriptor::array("columns", PropertySchema::Scalar(PropertyKind::Object))
                .with_label("Columns")
                .with_section(Section::Settings)
                .bindable()
                .with_default(json!([])),
        )
        .with_property(
            PropertyDescriptor::on_off("selectable")
                .with_label("Selectable Rows")
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("showHeader")
                .with_label("Show Header")
                .with_section(Section::Settings)
                .with_default(true)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("showFooter")
                .with_label("Show Footer")
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("caption")
                .with_label("Caption")
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::text("emptyText")
                .with_label("Empty Text")
                .bindable()
                .with_default("No data available"),
        )
        .with_property(
            PropertyDescriptor::text("rowKey")
                .with_label("Row Key")
                .with_section(Section::Settings)
                .bindable()
                .with_default("id"),
        )
        .with_property(class_hook("containerClass", "Container Class"))
        .with_property(class_hook("customClass", "Table Class"))
        .with_property(class_hook("headerClass", "Header Class"))
        .with_property(class_hook("bodyClass", "Body Class"))
        .with_property(class_hook("footerClass", "Footer Class"))
        .with_property(class_hook("rowClass", "Row Class"))
        .with_property(class_hook("cellClass", "Cell Class"))
        .with_trigger_event(TriggerEvent::new("rowClick", "On Row Click"))
        .with_trigger_event(TriggerEvent::new("sort", "On Sort"))
        .with_trigger_event(TriggerEvent::new("selectionChange", "On Selection Change"))
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
    fn no_event_is_marked_default() {
        let widget = descriptor();
        assert_eq!(widget.trigger_events().len(), 3);
        assert!(widget.trigger_events().default_event().is_none());
    }

    #[test]
    fn free_shape_rows_carry_no_children() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("data".into(), json!([{ "id": 1, "name": "Ada" }]));
        let view = resolve(&widget, &content);
        let data = view.get("data").unwrap();
        assert_eq!(data.value.as_array().map(Vec::len), Some(1));
        // scalar item schema means no per-element breakdown
        assert!(data.children.is_none());
    }
}
