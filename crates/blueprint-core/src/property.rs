//! Per-property descriptors.

use serde::Serialize;
use serde_json::Value;

use crate::label::Label;
use crate::schema::{Choice, PropertyKind, PropertySchema};
use crate::visibility::VisibilityRule;

/// Editor panel a property is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Content panel (texts, items, media).
    #[default]
    Content,
    /// Style panel (variants, sizes, colors).
    Style,
    /// Settings panel (modes, limits, toggles).
    Settings,
    /// Behavior panel (disabled state, close-on-escape, ...).
    Behavior,
    /// Layout panel (header/footer visibility, sides).
    Layout,
    /// Form-field definitions.
    Form,
    /// Action-button definitions.
    Actions,
}

/// Static description of one editable widget property.
///
/// Built with the per-kind constructors and chained `with_*` methods:
///
/// ```
/// use blueprint_core::{PropertyDescriptor, Section, VisibilityRule};
///
/// let prop = PropertyDescriptor::on_off("collapsible")
///     .with_label("Collapsible")
///     .with_section(Section::Settings)
///     .with_default(true)
///     .bindable()
///     .hidden_when(VisibilityRule::ne("type", "single"));
/// assert_eq!(prop.key(), "collapsible");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    key: String,
    label: Label,
    section: Section,
    schema: PropertySchema,
    default_value: Value,
    bindable: bool,
    multilang: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<VisibilityRule>,
}

impl PropertyDescriptor {
    /// Create a property with an explicit schema. The label defaults to the
    /// key text until [`with_label`](Self::with_label) replaces it.
    pub fn new(key: impl Into<String>, schema: PropertySchema) -> Self {
        let key = key.into();
        Self {
            label: Label::new(key.clone()),
            key,
            section: Section::default(),
            schema,
            default_value: Value::Null,
            bindable: false,
            multilang: false,
            placeholder: None,
            choices: Vec::new(),
            visibility: None,
        }
    }

    /// Single-line text property.
    pub fn text(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::Text))
    }

    /// Multi-line text property.
    pub fn long_text(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::LongText))
    }

    /// Numeric property.
    pub fn number(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::Number))
    }

    /// Boolean toggle property.
    pub fn on_off(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::OnOff))
    }

    /// Enumerated-choice property; choices attach via
    /// [`with_choice`](Self::with_choice).
    pub fn select(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::TextSelect))
    }

    /// Color property.
    pub fn color(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::Color))
    }

    /// CSS length property.
    pub fn length(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::Length))
    }

    /// Rich-text property.
    pub fn rich_text(key: impl Into<String>) -> Self {
        Self::new(key, PropertySchema::Scalar(PropertyKind::RichText))
    }

    /// Sequence property with the given item schema.
    pub fn array(key: impl Into<String>, item: PropertySchema) -> Self {
        Self::new(key, PropertySchema::List(Box::new(item)))
    }

    /// Keyed-record property with the given ordered sub-fields.
    pub fn object(key: impl Into<String>, fields: Vec<PropertyDescriptor>) -> Self {
        Self::new(key, PropertySchema::Record(fields))
    }

    /// Set the editor label.
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the editor section (default: [`Section::Content`]).
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Set the default value used when the content object has no entry.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Mark the property as bindable to an external data source.
    pub fn bindable(mut self) -> Self {
        self.bindable = true;
        self
    }

    /// Mark the property as carrying per-locale text values.
    pub fn multilang(mut self) -> Self {
        self.multilang = true;
        self
    }

    /// Set the input placeholder shown by the editor.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Append one select choice.
    pub fn with_choice(mut self, value: impl Into<Value>, label: impl Into<Label>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    /// Attach the rule that hides this property.
    pub fn hidden_when(mut self, rule: VisibilityRule) -> Self {
        self.visibility = Some(rule);
        self
    }

    /// The unique key within the widget.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The editor label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The editor section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// The value schema.
    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    /// The editor control kind.
    pub fn kind(&self) -> PropertyKind {
        self.schema.kind()
    }

    /// The declared default value (`Null` when none was declared).
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Whether the property may be wired to an external data source.
    pub fn is_bindable(&self) -> bool {
        self.bindable
    }

    /// Whether the property holds per-locale text.
    pub fn is_multilang(&self) -> bool {
        self.multilang
    }

    /// The input placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The select choices (empty for non-select properties).
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The hide rule, if any. Absence means always visible.
    pub fn visibility(&self) -> Option<&VisibilityRule> {
        self.visibility.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_defaults_to_key() {
        let prop = PropertyDescriptor::text("title");
        assert_eq!(prop.label().en(), "title");
    }

    #[test]
    fn builder_sets_every_field() {
        let prop = PropertyDescriptor::select("variant")
            .with_label("Variant")
            .with_section(Section::Style)
            .with_choice("default", "Default")
            .with_choice("outline", "Outline")
            .with_default("default")
            .bindable();
        assert_eq!(prop.kind(), PropertyKind::TextSelect);
        assert_eq!(prop.section(), Section::Style);
        assert_eq!(prop.choices().len(), 2);
        assert_eq!(prop.default_value(), &json!("default"));
        assert!(prop.is_bindable());
        assert!(prop.visibility().is_none());
    }

    #[test]
    fn array_wraps_item_schema() {
        let prop = PropertyDescriptor::array(
            "items",
            PropertySchema::Record(vec![PropertyDescriptor::text("title")]),
        );
        assert_eq!(prop.kind(), PropertyKind::Array);
        assert_eq!(prop.schema().fields().len(), 1);
    }
}
