//! **blueprint** -- declarative widget descriptors for no-code builders.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! blueprint = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`blueprint_core`] are available at the crate
//!   root ([`WidgetDescriptor`], [`PropertyDescriptor`], [`VisibilityRule`],
//!   [`Registry`], [`resolve`], etc.).
//! * The [`widgets`] module re-exports the built-in catalog from
//!   [`blueprint_widgets`], including [`widgets::catalog`].
//! * [`serde_json`] is re-exported so downstream crates can build content
//!   objects without depending on it directly.
//!
//! # Quick start
//!
//! ```
//! use blueprint::{resolve, widgets, Content};
//! use serde_json::json;
//!
//! let registry = widgets::catalog().unwrap();
//! let button = registry.get("Button").unwrap();
//!
//! let mut content = Content::new();
//! content.insert("loading".into(), json!(true));
//!
//! let view = resolve(button, &content);
//! assert!(view.get("loadingText").unwrap().visible);
//! ```

pub use blueprint_core::*;
pub mod widgets {
    pub use blueprint_widgets::*;
}

// Re-export for use in examples and downstream crates
pub use serde_json;
