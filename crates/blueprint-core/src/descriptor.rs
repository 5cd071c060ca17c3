//! Widget descriptors and their load-time validation.

use indexmap::IndexMap;
use serde::Serialize;

use crate::event::{TriggerEvent, TriggerEvents};
use crate::label::Label;
use crate::property::PropertyDescriptor;
use crate::schema::{PropertyKind, PropertySchema};

/// Editor-level switches for one widget.
///
/// All default to `false`; use struct update syntax to override only the
/// flags a widget sets:
///
/// ```
/// use blueprint_core::EditorOptions;
///
/// let opts = EditorOptions {
///     sizable: true,
///     ..EditorOptions::default()
/// };
/// assert!(!opts.hyperlink);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EditorOptions {
    /// Size the element from its content instead of an explicit box.
    pub auto_by_content: bool,
    /// Allow the user to resize the element on the canvas.
    pub sizable: bool,
    /// Allow wrapping the element in a hyperlink.
    pub hyperlink: bool,
}

/// Errors detected while validating a descriptor, before it is admitted to a
/// [`Registry`](crate::Registry). All are fatal to loading that descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// Two properties of one widget share a key.
    #[error("widget `{widget}` declares property key `{key}` more than once")]
    DuplicateProperty {
        /// Widget name.
        widget: String,
        /// The repeated property key.
        key: String,
    },

    /// More than one trigger event is marked default.
    #[error("widget `{widget}` marks both `{first}` and `{second}` as default trigger events")]
    DuplicateDefaultEvent {
        /// Widget name.
        widget: String,
        /// First event marked default.
        first: String,
        /// Second event marked default.
        second: String,
    },

    /// A visibility rule reads the property it is attached to.
    #[error("visibility rule of `{widget}.{key}` references its own key")]
    SelfReferencingRule {
        /// Widget name.
        widget: String,
        /// The offending property key.
        key: String,
    },

    /// A declared default value does not fit the property's schema.
    #[error("default value of `{widget}.{key}` does not match its {expected:?} schema")]
    DefaultShapeMismatch {
        /// Widget name.
        widget: String,
        /// The offending property key.
        key: String,
        /// The kind the schema expects.
        expected: PropertyKind,
    },
}

/// Static schema of one widget: editor metadata, ordered properties, and
/// trigger events.
///
/// Descriptors are built once at startup and never mutated afterwards.
/// Property insertion order is the declared editor order and is preserved
/// through resolution.
///
/// # Example
///
/// ```
/// use blueprint_core::{PropertyDescriptor, TriggerEvent, WidgetDescriptor};
///
/// let widget = WidgetDescriptor::new("Toggle", "Shadcn UI Toggle")
///     .with_icon("toggle-on")
///     .with_property(PropertyDescriptor::on_off("pressed").with_default(false))
///     .with_trigger_event(TriggerEvent::new("click", "On click").as_default());
/// assert!(widget.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetDescriptor {
    name: String,
    label: Label,
    icon: String,
    editor_options: EditorOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    style_order: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    settings_order: Vec<String>,
    properties: IndexMap<String, PropertyDescriptor>,
    trigger_events: TriggerEvents,
    #[serde(skip)]
    duplicate_keys: Vec<String>,
}

impl WidgetDescriptor {
    /// Create a descriptor from its registry name and editor label.
    pub fn new(name: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            icon: String::new(),
            editor_options: EditorOptions::default(),
            style_order: Vec::new(),
            settings_order: Vec::new(),
            properties: IndexMap::new(),
            trigger_events: TriggerEvents::new(),
            duplicate_keys: Vec::new(),
        }
    }

    /// Set the editor icon reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the editor-level switches.
    pub fn with_editor_options(mut self, options: EditorOptions) -> Self {
        self.editor_options = options;
        self
    }

    /// Set the grouped rows of the style panel (each inner slice is one row
    /// of property keys).
    pub fn with_style_order<R, K>(mut self, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.style_order = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    /// Set the flat ordering of the settings panel.
    pub fn with_settings_order<K: Into<String>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.settings_order = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Append a property. Declaration order is the editor order.
    ///
    /// A repeated key is recorded and later rejected by
    /// [`validate`](Self::validate); the first declaration wins meanwhile.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        let key = property.key().to_string();
        if self.properties.contains_key(&key) {
            self.duplicate_keys.push(key);
        } else {
            self.properties.insert(key, property);
        }
        self
    }

    /// Append a trigger event.
    pub fn with_trigger_event(mut self, event: TriggerEvent) -> Self {
        self.trigger_events.push(event);
        self
    }

    /// Check the descriptor invariants.
    ///
    /// Fails on a repeated property key, a second default trigger event, a
    /// visibility rule referencing its own property, or a default value that
    /// does not fit its schema. A rule referencing a key this descriptor does
    /// not declare is allowed (the host's content object can be wider than
    /// one widget's schema) but logged, so the coupling stays visible.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if let Some(key) = self.duplicate_keys.first() {
            return Err(DescriptorError::DuplicateProperty {
                widget: self.name.clone(),
                key: key.clone(),
            });
        }
        if let Some((first, second)) = self.trigger_events.duplicate_default() {
            return Err(DescriptorError::DuplicateDefaultEvent {
                widget: self.name.clone(),
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        for property in self.properties.values() {
            self.validate_property(property)?;
        }
        Ok(())
    }

    fn validate_property(&self, property: &PropertyDescriptor) -> Result<(), DescriptorError> {
        if let Some(rule) = property.visibility() {
            for referenced in rule.referenced_keys() {
                if referenced == property.key() {
                    return Err(DescriptorError::SelfReferencingRule {
                        widget: self.name.clone(),
                        key: property.key().to_string(),
                    });
                }
                if !self.properties.contains_key(referenced) {
                    tracing::warn!(
                        widget = %self.name,
                        property = %property.key(),
                        referenced,
                        "visibility rule references a key outside this descriptor"
                    );
                }
            }
        }
        if !property.schema().accepts(property.default_value()) {
            return Err(DescriptorError::DefaultShapeMismatch {
                widget: self.name.clone(),
                key: property.key().to_string(),
                expected: property.kind(),
            });
        }
        for field in property.schema().fields() {
            self.validate_property(field)?;
        }
        Ok(())
    }

    /// The registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The editor label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The editor icon reference.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The editor-level switches.
    pub fn editor_options(&self) -> EditorOptions {
        self.editor_options
    }

    /// Grouped rows of the style panel.
    pub fn style_order(&self) -> &[Vec<String>] {
        &self.style_order
    }

    /// Flat ordering of the settings panel.
    pub fn settings_order(&self) -> &[String] {
        &self.settings_order
    }

    /// Look a property up by key.
    pub fn property(&self, key: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(key)
    }

    /// Iterate the properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }

    /// Number of declared properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// The trigger-event table.
    pub fn trigger_events(&self) -> &TriggerEvents {
        &self.trigger_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::VisibilityRule;
    use serde_json::json;

    fn minimal() -> WidgetDescriptor {
        WidgetDescriptor::new("Widget", "A widget")
            .with_property(PropertyDescriptor::text("title").with_default("Hello"))
    }

    #[test]
    fn valid_descriptor_passes() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn duplicate_property_key_is_rejected() {
        let widget = minimal().with_property(PropertyDescriptor::number("title"));
        assert_eq!(
            widget.validate(),
            Err(DescriptorError::DuplicateProperty {
                widget: "Widget".into(),
                key: "title".into(),
            })
        );
    }

    #[test]
    fn second_default_event_is_rejected() {
        let widget = minimal()
            .with_trigger_event(TriggerEvent::new("click", "On click").as_default())
            .with_trigger_event(TriggerEvent::new("close", "On close").as_default());
        assert_eq!(
            widget.validate(),
            Err(DescriptorError::DuplicateDefaultEvent {
                widget: "Widget".into(),
                first: "click".into(),
                second: "close".into(),
            })
        );
    }

    #[test]
    fn self_referencing_rule_is_rejected() {
        let widget = WidgetDescriptor::new("Widget", "A widget").with_property(
            PropertyDescriptor::on_off("loop").hidden_when(VisibilityRule::falsy("loop")),
        );
        assert_eq!(
            widget.validate(),
            Err(DescriptorError::SelfReferencingRule {
                widget: "Widget".into(),
                key: "loop".into(),
            })
        );
    }

    #[test]
    fn mismatched_default_is_rejected() {
        let widget = WidgetDescriptor::new("Widget", "A widget")
            .with_property(PropertyDescriptor::on_off("open").with_default("yes"));
        assert_eq!(
            widget.validate(),
            Err(DescriptorError::DefaultShapeMismatch {
                widget: "Widget".into(),
                key: "open".into(),
                expected: PropertyKind::OnOff,
            })
        );
    }

    #[test]
    fn nested_field_defaults_are_checked() {
        let widget = WidgetDescriptor::new("Widget", "A widget").with_property(
            PropertyDescriptor::array(
                "items",
                PropertySchema::Record(vec![
                    PropertyDescriptor::number("count").with_default(json!("three")),
                ]),
            ),
        );
        assert!(matches!(
            widget.validate(),
            Err(DescriptorError::DefaultShapeMismatch { .. })
        ));
    }

    #[test]
    fn cross_descriptor_reference_is_allowed() {
        let widget = WidgetDescriptor::new("Widget", "A widget").with_property(
            PropertyDescriptor::text("hint").hidden_when(VisibilityRule::falsy("globalFlag")),
        );
        assert!(widget.validate().is_ok());
    }

    #[test]
    fn property_order_is_declaration_order() {
        let widget = WidgetDescriptor::new("Widget", "A widget")
            .with_property(PropertyDescriptor::text("b"))
            .with_property(PropertyDescriptor::text("a"))
            .with_property(PropertyDescriptor::text("c"));
        let keys: Vec<_> = widget.properties().map(PropertyDescriptor::key).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }
}
