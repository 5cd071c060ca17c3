//! The widget-descriptor registry.
//!
//! Populated wholesale at startup, read-only afterwards. Because nothing
//! mutates a registered descriptor, a `Registry` can be shared freely across
//! rendering threads behind an `Arc` without locking.

use indexmap::IndexMap;

use crate::descriptor::{DescriptorError, WidgetDescriptor};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The requested widget name is not registered.
    #[error("unknown widget `{0}`")]
    NotFound(String),

    /// A widget with this name is already registered; use
    /// [`Registry::replace`] to overwrite deliberately.
    #[error("widget `{0}` is already registered")]
    AlreadyRegistered(String),

    /// The descriptor failed validation and was not admitted.
    #[error(transparent)]
    Invalid(#[from] DescriptorError),
}

/// Immutable-after-load set of [`WidgetDescriptor`]s keyed by widget name.
///
/// ```
/// use blueprint_core::{PropertyDescriptor, Registry, WidgetDescriptor};
///
/// let mut registry = Registry::new();
/// registry.register(
///     WidgetDescriptor::new("Badge", "Shadcn UI Badge")
///         .with_property(PropertyDescriptor::text("text").with_default("Badge")),
/// )?;
/// let badge = registry.get("Badge")?;
/// assert_eq!(badge.property_count(), 1);
/// # Ok::<(), blueprint_core::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    widgets: IndexMap<String, WidgetDescriptor>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and admit a descriptor.
    ///
    /// Fails fast on an invalid descriptor and refuses to overwrite an
    /// existing registration silently.
    pub fn register(&mut self, descriptor: WidgetDescriptor) -> Result<(), RegistryError> {
        descriptor.validate()?;
        if self.widgets.contains_key(descriptor.name()) {
            return Err(RegistryError::AlreadyRegistered(descriptor.name().to_string()));
        }
        self.widgets.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Validate and admit a descriptor, deliberately replacing any existing
    /// registration under the same name. Returns the descriptor it replaced.
    pub fn replace(
        &mut self,
        descriptor: WidgetDescriptor,
    ) -> Result<Option<WidgetDescriptor>, RegistryError> {
        descriptor.validate()?;
        Ok(self
            .widgets
            .insert(descriptor.name().to_string(), descriptor))
    }

    /// Look a descriptor up by widget name.
    pub fn get(&self, name: &str) -> Result<&WidgetDescriptor, RegistryError> {
        self.widgets
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Whether a widget is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.widgets.contains_key(name)
    }

    /// Registered widget names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    /// Iterate the descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.values()
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TriggerEvent;
    use crate::property::PropertyDescriptor;

    fn badge() -> WidgetDescriptor {
        WidgetDescriptor::new("Badge", "Shadcn UI Badge")
            .with_property(PropertyDescriptor::text("text").with_default("Badge"))
    }

    #[test]
    fn get_after_register_roundtrips() {
        let mut registry = Registry::new();
        registry.register(badge()).unwrap();
        assert_eq!(registry.get("Badge").unwrap().name(), "Badge");
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let registry = Registry::new();
        assert_eq!(
            registry.get("Carousel"),
            Err(RegistryError::NotFound("Carousel".into()))
        );
    }

    #[test]
    fn register_refuses_silent_overwrite() {
        let mut registry = Registry::new();
        registry.register(badge()).unwrap();
        assert_eq!(
            registry.register(badge()),
            Err(RegistryError::AlreadyRegistered("Badge".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn replace_overwrites_and_returns_previous() {
        let mut registry = Registry::new();
        registry.register(badge()).unwrap();
        let replacement = WidgetDescriptor::new("Badge", "Badge v2");
        let previous = registry.replace(replacement).unwrap();
        assert_eq!(previous.unwrap().label().en(), "Shadcn UI Badge");
        assert_eq!(registry.get("Badge").unwrap().label().en(), "Badge v2");
    }

    #[test]
    fn register_validates_the_descriptor() {
        let mut registry = Registry::new();
        let invalid = badge()
            .with_trigger_event(TriggerEvent::new("a", "A").as_default())
            .with_trigger_event(TriggerEvent::new("b", "B").as_default());
        assert!(matches!(
            registry.register(invalid),
            Err(RegistryError::Invalid(_))
        ));
        assert!(registry.is_empty());
    }
}
