//! Core data model for **blueprint** -- declarative widget descriptors for a
//! no-code builder runtime.
//!
//! `blueprint-core` defines the static schema a widget exposes to the
//! builder's editor (labels, property definitions, trigger events) and the
//! one piece of real behavior the format needs: the property schema
//! resolver, which computes each property's effective visibility and value
//! for a live content object.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`WidgetDescriptor`] | Static schema of one widget (properties + events) |
//! | [`PropertyDescriptor`] | One editable property: label, schema, default, visibility |
//! | [`PropertySchema`] | Recursive value shape: scalar, list, or record |
//! | [`VisibilityRule`] | Declarative predicate deciding when a property is hidden |
//! | [`TriggerEvents`] | Ordered table of the events a widget can emit |
//! | [`Registry`] | Immutable-after-load set of descriptors, keyed by name |
//! | [`resolve`] | (descriptor, content) → [`ResolvedView`] |
//!
//! # Lifecycle
//!
//! Descriptors are built once at application start with the builder API,
//! validated as they enter the [`Registry`], and never mutated afterwards.
//! Resolution runs per render/edit interaction against a content object the
//! resolver never mutates; it is synchronous, allocation-light, and safe to
//! call concurrently.
//!
//! # Quick example
//!
//! ```
//! use blueprint_core::{
//!     resolve, PropertyDescriptor, Registry, Section, TriggerEvent, VisibilityRule,
//!     WidgetDescriptor,
//! };
//! use serde_json::{json, Map};
//!
//! let badge = WidgetDescriptor::new("Badge", "Shadcn UI Badge")
//!     .with_icon("tag")
//!     .with_property(
//!         PropertyDescriptor::text("text")
//!             .with_label("Badge text")
//!             .with_default("Badge")
//!             .bindable(),
//!     )
//!     .with_property(
//!         PropertyDescriptor::on_off("showIcon")
//!             .with_section(Section::Settings)
//!             .with_default(false),
//!     )
//!     .with_property(
//!         PropertyDescriptor::text("iconName")
//!             .with_default("star")
//!             .hidden_when(VisibilityRule::falsy("showIcon")),
//!     )
//!     .with_trigger_event(TriggerEvent::new("click", "On click").as_default());
//!
//! let mut registry = Registry::new();
//! registry.register(badge)?;
//!
//! let mut content = Map::new();
//! content.insert("showIcon".into(), json!(false));
//!
//! let view = resolve(registry.get("Badge")?, &content);
//! assert!(!view.get("iconName").unwrap().visible);
//! assert_eq!(view.get("text").unwrap().value, json!("Badge"));
//! # Ok::<(), blueprint_core::RegistryError>(())
//! ```

pub mod descriptor;
pub mod event;
pub mod label;
pub mod property;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod visibility;

pub use descriptor::{DescriptorError, EditorOptions, WidgetDescriptor};
pub use event::{TriggerEvent, TriggerEvents};
pub use label::Label;
pub use property::{PropertyDescriptor, Section};
pub use registry::{Registry, RegistryError};
pub use resolve::{resolve, Content, ResolvedChildren, ResolvedProperty, ResolvedView};
pub use schema::{Choice, PropertyKind, PropertySchema};
pub use visibility::{is_truthy, VisibilityRule};
