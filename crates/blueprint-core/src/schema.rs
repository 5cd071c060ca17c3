//! Property value schemas.
//!
//! The original descriptor format expressed nested collection shapes through
//! ad hoc `options.item` records whose layout differed from widget to widget.
//! Here every property carries a single recursive [`PropertySchema`]:
//!
//! - [`PropertySchema::Scalar`]: a leaf value of one [`PropertyKind`];
//! - [`PropertySchema::List`]: a homogeneous sequence of an inner schema;
//! - [`PropertySchema::Record`]: an ordered set of named sub-fields, each a
//!   full [`PropertyDescriptor`](crate::PropertyDescriptor).
//!
//! Deeply nested shapes (a chart's list of series, each holding a list of
//! data points) compose naturally: `List(Record(... List(Record(...))))`.

use serde::Serialize;
use serde_json::Value;

use crate::label::Label;
use crate::property::PropertyDescriptor;

/// The editor control kind of a leaf property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    LongText,
    /// Numeric input.
    Number,
    /// Boolean toggle.
    OnOff,
    /// Single choice among enumerated options.
    TextSelect,
    /// Sequence of items (always paired with a [`PropertySchema::List`]).
    Array,
    /// Keyed record (always paired with a [`PropertySchema::Record`]).
    Object,
    /// Color picker value.
    Color,
    /// CSS length input (e.g. `"100%"`, `"20px"`).
    Length,
    /// Rich-text editor content.
    RichText,
}

/// One selectable option of a `TextSelect` property.
///
/// Choice values are raw JSON values, not strings: the aspect-ratio widget
/// mixes numeric ratios with a `"custom"` sentinel in one select.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    value: Value,
    label: Label,
}

impl Choice {
    /// Create a choice from its stored value and editor label.
    pub fn new(value: impl Into<Value>, label: impl Into<Label>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The value stored in the content object when this choice is picked.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The editor label.
    pub fn label(&self) -> &Label {
        &self.label
    }
}

/// Recursive shape of a property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertySchema {
    /// A leaf value.
    Scalar(PropertyKind),
    /// A homogeneous sequence of the inner schema.
    List(Box<PropertySchema>),
    /// An ordered set of named sub-fields.
    Record(Vec<PropertyDescriptor>),
}

impl PropertySchema {
    /// The [`PropertyKind`] this schema presents to the editor.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertySchema::Scalar(kind) => *kind,
            PropertySchema::List(_) => PropertyKind::Array,
            PropertySchema::Record(_) => PropertyKind::Object,
        }
    }

    /// The nested sub-fields of a `Record`, or of a `List` whose items are
    /// records. Empty for scalar shapes.
    pub fn fields(&self) -> &[PropertyDescriptor] {
        match self {
            PropertySchema::Record(fields) => fields,
            PropertySchema::List(item) => match item.as_ref() {
                PropertySchema::Record(fields) => fields,
                _ => &[],
            },
            PropertySchema::Scalar(_) => &[],
        }
    }

    /// Whether `value` has a shape this schema can hold.
    ///
    /// `Null` is accepted everywhere: it stands for "no default declared".
    /// Record values are checked structurally (an object), not field by
    /// field, since content objects are routinely sparse.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }
        match self {
            PropertySchema::Scalar(kind) => kind_accepts(*kind, value),
            PropertySchema::List(item) => match value.as_array() {
                Some(items) => items.iter().all(|v| item.accepts(v)),
                None => false,
            },
            PropertySchema::Record(_) => value.is_object(),
        }
    }
}

fn kind_accepts(kind: PropertyKind, value: &Value) -> bool {
    match kind {
        PropertyKind::Text
        | PropertyKind::LongText
        | PropertyKind::Color
        | PropertyKind::Length
        | PropertyKind::RichText => value.is_string(),
        PropertyKind::Number => value.is_number(),
        PropertyKind::OnOff => value.is_boolean(),
        // Select values are opaque scalars; widgets store strings, numbers,
        // and the occasional boolean.
        PropertyKind::TextSelect => !value.is_array() && !value.is_object(),
        PropertyKind::Array => value.is_array(),
        PropertyKind::Object => value.is_object(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_kinds_accept_matching_shapes() {
        assert!(PropertySchema::Scalar(PropertyKind::Text).accepts(&json!("hi")));
        assert!(!PropertySchema::Scalar(PropertyKind::Text).accepts(&json!(3)));
        assert!(PropertySchema::Scalar(PropertyKind::Number).accepts(&json!(1.5)));
        assert!(PropertySchema::Scalar(PropertyKind::OnOff).accepts(&json!(true)));
        assert!(!PropertySchema::Scalar(PropertyKind::OnOff).accepts(&json!("true")));
    }

    #[test]
    fn null_is_accepted_everywhere() {
        assert!(PropertySchema::Scalar(PropertyKind::Number).accepts(&Value::Null));
        assert!(PropertySchema::Record(vec![]).accepts(&Value::Null));
    }

    #[test]
    fn select_accepts_mixed_scalar_values() {
        let schema = PropertySchema::Scalar(PropertyKind::TextSelect);
        assert!(schema.accepts(&json!("custom")));
        assert!(schema.accepts(&json!(1.777)));
        assert!(!schema.accepts(&json!([1, 2])));
    }

    #[test]
    fn list_checks_every_element() {
        let schema = PropertySchema::List(Box::new(PropertySchema::Scalar(PropertyKind::Number)));
        assert!(schema.accepts(&json!([1, 2, 3])));
        assert!(!schema.accepts(&json!([1, "two"])));
        assert!(!schema.accepts(&json!("not a list")));
    }

    #[test]
    fn kind_reflects_container_shape() {
        let list = PropertySchema::List(Box::new(PropertySchema::Scalar(PropertyKind::Text)));
        assert_eq!(list.kind(), PropertyKind::Array);
        assert_eq!(PropertySchema::Record(vec![]).kind(), PropertyKind::Object);
    }
}
