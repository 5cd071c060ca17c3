//! The property schema resolver.
//!
//! [`resolve`] is the one piece of real computation in this crate: given a
//! [`WidgetDescriptor`] and the live content object of one widget instance,
//! it decides for every property whether the editor should show it and which
//! value it currently carries.
//!
//! Resolution is pure. It never mutates the content object, holds no state
//! between calls, and resolving the same inputs twice yields identical
//! views, so callers may memoize freely and call it concurrently from any
//! number of rendering contexts.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::descriptor::WidgetDescriptor;
use crate::property::PropertyDescriptor;
use crate::schema::PropertySchema;

/// The live key/value data of one widget instance, as supplied by the host
/// runtime. Routinely sparse: absent keys fall back to descriptor defaults.
pub type Content = Map<String, Value>;

/// Nested resolution results for container properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResolvedChildren {
    /// One view per element of a list of records.
    Items(Vec<ResolvedView>),
    /// The view of a record's sub-fields.
    Fields(ResolvedView),
}

/// Visibility and effective value of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProperty {
    /// Whether the editor should show this property.
    pub visible: bool,
    /// The content value when present, otherwise the descriptor default.
    pub value: Value,
    /// Nested views for container properties with record item schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<ResolvedChildren>,
}

/// Per-property resolution results, in descriptor declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResolvedView {
    entries: IndexMap<String, ResolvedProperty>,
}

impl ResolvedView {
    /// Look a resolved property up by key.
    pub fn get(&self, key: &str) -> Option<&ResolvedProperty> {
        self.entries.get(key)
    }

    /// Iterate entries in descriptor declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedProperty)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of resolved properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a widget's content object against its descriptor.
///
/// For each property, in declaration order:
///
/// 1. effective value = `content[key]` when present and non-null, else the
///    descriptor default;
/// 2. visible = `true` unless the property's visibility rule, evaluated
///    against the *raw* content object, reports hidden. Rules fail open: an
///    undecidable rule leaves the property visible.
///
/// Array and Object properties whose schema nests record fields recurse,
/// resolving each element (or the sub-object) against the field descriptors
/// the same way.
///
/// ```
/// use blueprint_core::{resolve, PropertyDescriptor, WidgetDescriptor};
/// use serde_json::{json, Map};
///
/// let widget = WidgetDescriptor::new("Badge", "Badge")
///     .with_property(PropertyDescriptor::text("text").with_default("Badge"));
///
/// let view = resolve(&widget, &Map::new());
/// assert_eq!(view.get("text").unwrap().value, json!("Badge"));
/// ```
pub fn resolve(descriptor: &WidgetDescriptor, content: &Content) -> ResolvedView {
    resolve_fields(descriptor.properties(), content)
}

fn resolve_fields<'a>(
    properties: impl Iterator<Item = &'a PropertyDescriptor>,
    content: &Content,
) -> ResolvedView {
    let mut entries = IndexMap::new();
    for property in properties {
        entries.insert(property.key().to_string(), resolve_property(property, content));
    }
    ResolvedView { entries }
}

fn resolve_property(property: &PropertyDescriptor, content: &Content) -> ResolvedProperty {
    let value = match content.get(property.key()) {
        Some(value) if !value.is_null() => value.clone(),
        _ => property.default_value().clone(),
    };
    let visible = match property.visibility() {
        Some(rule) => !rule.hidden(content),
        None => true,
    };
    let children = resolve_children(property.schema(), &value);
    ResolvedProperty {
        visible,
        value,
        children,
    }
}

fn resolve_children(schema: &PropertySchema, value: &Value) -> Option<ResolvedChildren> {
    match schema {
        PropertySchema::List(item) => {
            let fields = match item.as_ref() {
                PropertySchema::Record(fields) => fields,
                _ => return None,
            };
            let items = value.as_array()?;
            let empty = Content::new();
            let views = items
                .iter()
                .map(|element| {
                    // A non-object element resolves as if empty, falling back
                    // to the field defaults rather than failing the view.
                    let element = element.as_object().unwrap_or(&empty);
                    resolve_fields(fields.iter(), element)
                })
                .collect();
            Some(ResolvedChildren::Items(views))
        }
        PropertySchema::Record(fields) => {
            let object = value.as_object()?;
            Some(ResolvedChildren::Fields(resolve_fields(
                fields.iter(),
                object,
            )))
        }
        PropertySchema::Scalar(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyDescriptor;
    use crate::schema::PropertySchema;
    use crate::visibility::VisibilityRule;
    use serde_json::json;

    fn content(pairs: &[(&str, Value)]) -> Content {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn widget() -> WidgetDescriptor {
        WidgetDescriptor::new("Sample", "Sample")
            .with_property(PropertyDescriptor::text("title").with_default("Hello"))
            .with_property(
                PropertyDescriptor::text("subtitle")
                    .hidden_when(VisibilityRule::falsy("showSubtitle")),
            )
            .with_property(PropertyDescriptor::on_off("showSubtitle").with_default(false))
    }

    #[test]
    fn content_value_wins_over_default() {
        let view = resolve(&widget(), &content(&[("title", json!("Custom"))]));
        assert_eq!(view.get("title").unwrap().value, json!("Custom"));
    }

    #[test]
    fn absent_key_falls_back_to_default() {
        let view = resolve(&widget(), &Content::new());
        assert_eq!(view.get("title").unwrap().value, json!("Hello"));
    }

    #[test]
    fn null_content_value_falls_back_to_default() {
        let view = resolve(&widget(), &content(&[("title", Value::Null)]));
        assert_eq!(view.get("title").unwrap().value, json!("Hello"));
    }

    #[test]
    fn property_without_rule_is_always_visible() {
        let view = resolve(&widget(), &content(&[("showSubtitle", json!(false))]));
        assert!(view.get("title").unwrap().visible);
        assert!(view.get("showSubtitle").unwrap().visible);
    }

    #[test]
    fn rule_reads_raw_content_not_defaults() {
        // showSubtitle defaults to false, but the rule sees only the raw
        // content object; with the key absent, the rule fails open.
        let view = resolve(&widget(), &Content::new());
        assert!(view.get("subtitle").unwrap().visible);

        let view = resolve(&widget(), &content(&[("showSubtitle", json!(false))]));
        assert!(!view.get("subtitle").unwrap().visible);
    }

    #[test]
    fn resolution_is_idempotent() {
        let data = content(&[("title", json!("A")), ("showSubtitle", json!(true))]);
        let first = resolve(&widget(), &data);
        let second = resolve(&widget(), &data);
        assert_eq!(first, second);
    }

    #[test]
    fn view_preserves_declaration_order() {
        let view = resolve(&widget(), &Content::new());
        let keys: Vec<_> = view.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["title", "subtitle", "showSubtitle"]);
    }

    #[test]
    fn list_of_records_resolves_each_element() {
        let widget = WidgetDescriptor::new("List", "List").with_property(
            PropertyDescriptor::array(
                "items",
                PropertySchema::Record(vec![
                    PropertyDescriptor::text("label").with_default("Item"),
                    PropertyDescriptor::on_off("done").with_default(false),
                ]),
            )
            .with_default(json!([])),
        );
        let data = content(&[(
            "items",
            json!([{ "label": "First", "done": true }, {}]),
        )]);
        let view = resolve(&widget, &data);
        let children = view.get("items").unwrap().children.as_ref().unwrap();
        let ResolvedChildren::Items(items) = children else {
            panic!("expected per-element views");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("label").unwrap().value, json!("First"));
        assert_eq!(items[0].get("done").unwrap().value, json!(true));
        // second element is sparse: defaults apply
        assert_eq!(items[1].get("label").unwrap().value, json!("Item"));
    }

    #[test]
    fn record_property_resolves_sub_fields() {
        let widget = WidgetDescriptor::new("Obj", "Obj").with_property(
            PropertyDescriptor::object(
                "config",
                vec![
                    PropertyDescriptor::select("type").with_default("line"),
                    PropertyDescriptor::on_off("showGrid").with_default(true),
                ],
            )
            .with_default(json!({})),
        );
        let data = content(&[("config", json!({ "type": "bar" }))]);
        let view = resolve(&widget, &data);
        let children = view.get("config").unwrap().children.as_ref().unwrap();
        let ResolvedChildren::Fields(fields) = children else {
            panic!("expected sub-field view");
        };
        assert_eq!(fields.get("type").unwrap().value, json!("bar"));
        assert_eq!(fields.get("showGrid").unwrap().value, json!(true));
    }

    #[test]
    fn scalar_list_has_no_children() {
        let widget = WidgetDescriptor::new("Nums", "Nums").with_property(
            PropertyDescriptor::array("values", PropertySchema::Scalar(crate::PropertyKind::Number))
                .with_default(json!([1, 2])),
        );
        let view = resolve(&widget, &Content::new());
        assert!(view.get("values").unwrap().children.is_none());
    }

    #[test]
    fn non_object_element_falls_back_to_field_defaults() {
        let widget = WidgetDescriptor::new("List", "List").with_property(
            PropertyDescriptor::array(
                "items",
                PropertySchema::Record(vec![PropertyDescriptor::text("label").with_default("x")]),
            ),
        );
        let data = content(&[("items", json!(["not an object"]))]);
        let view = resolve(&widget, &data);
        let Some(ResolvedChildren::Items(items)) = &view.get("items").unwrap().children else {
            panic!("expected per-element views");
        };
        assert_eq!(items[0].get("label").unwrap().value, json!("x"));
    }
}
