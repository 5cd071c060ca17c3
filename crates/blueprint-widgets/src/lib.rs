//! The built-in widget catalog for **blueprint**.
//!
//! Every module exposes a single `descriptor()` function returning the
//! [`blueprint_core::WidgetDescriptor`] for one builder component.
//! [`catalog`] validates and registers them all into a
//! [`blueprint_core::Registry`].
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`accordion`] | Stacked expandable sections |
//! | [`alert`] | Inline callout with title and description |
//! | [`alert_dialog`] | Modal confirmation dialog |
//! | [`aspect_ratio`] | Proportion-constrained container |
//! | [`avatar`] | Image with initials fallback and status dot |
//! | [`badge`] | Small status or count marker |
//! | [`breadcrumb`] | Hierarchical navigation trail |
//! | [`button`] | Primary action control |
//! | [`calendar`] | Date picker with mode selection |
//! | [`card`] | Header/body/footer container |
//! | [`carousel`] | Slide deck with autoplay |
//! | [`chart`] | Line, bar, area, and pie charts |
//! | [`checkbox`] | Binary choice with indeterminate support |
//! | [`collapsible`] | Single expandable region |
//! | [`form`] | Placeholder form container |
//! | [`input`] | Single-line text entry |
//! | [`label`] | Caption tied to a form control |
//! | [`pagination`] | Placeholder page navigation |
//! | [`progress`] | Determinate progress bar |
//! | [`radio_group`] | Exclusive choice among options |
//! | [`separator`] | Dividing rule |
//! | [`sheet`] | Sliding side panel |
//! | [`skeleton`] | Loading placeholder shapes |
//! | [`slider`] | Numeric value along a track |
//! | [`switch`] | On/off toggle |
//! | [`table`] | Tabular data with selection |
//! | [`tabs`] | Switchable panels |
//! | [`textarea`] | Multi-line text entry |
//! | [`toast`] | Placeholder notification |
//! | [`toggle`] | Two-state pressed button |
//! | [`toggle_group`] | Row of toggles |
//! | [`tooltip`] | Hover hint |

use blueprint_core::{Label, Registry, RegistryError, WidgetDescriptor};

pub mod accordion;
pub mod alert;
pub mod alert_dialog;
pub mod aspect_ratio;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod calendar;
pub mod card;
pub mod carousel;
pub mod chart;
pub mod checkbox;
pub mod collapsible;
pub mod form;
pub mod input;
pub mod label;
pub mod pagination;
pub mod progress;
pub mod radio_group;
pub mod separator;
pub mod sheet;
pub mod skeleton;
pub mod slider;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod textarea;
pub mod toast;
pub mod toggle;
pub mod toggle_group;
pub mod tooltip;

/// English label with a French translation.
pub(crate) fn fr(en: &str, fr: &str) -> Label {
    Label::new(en).with_locale("fr", fr)
}

/// All built-in descriptors, in catalog order.
pub fn descriptors() -> Vec<WidgetDescriptor> {
    vec![
        accordion::descriptor(),
        alert::descriptor(),
        alert_dialog::descriptor(),
        aspect_ratio::descriptor(),
        avatar::descriptor(),
        badge::descriptor(),
        breadcrumb::descriptor(),
        button::descriptor(),
        calendar::descriptor(),
        card::descriptor(),
        carousel::descriptor(),
        chart::descriptor(),
        checkbox::descriptor(),
        collapsible::descriptor(),
        form::descriptor(),
        input::descriptor(),
        label::descriptor(),
        pagination::descriptor(),
        progress::descriptor(),
        radio_group::descriptor(),
        separator::descriptor(),
        sheet::descriptor(),
        skeleton::descriptor(),
        slider::descriptor(),
        switch::descriptor(),
        table::descriptor(),
        tabs::descriptor(),
        textarea::descriptor(),
        toast::descriptor(),
        toggle::descriptor(),
        toggle_group::descriptor(),
        tooltip::descriptor(),
    ]
}

/// Build a [`Registry`] holding the full built-in catalog.
///
/// Every descriptor is validated on the way in; a defective built-in
/// surfaces here as a [`RegistryError`] rather than later in the editor.
pub fn catalog() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    for descriptor in descriptors() {
        registry.register(descriptor)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_every_widget() {
        let registry = catalog().unwrap();
        assert_eq!(registry.len(), 32);
        assert!(registry.contains("Button"));
        assert!(registry.contains("Tooltip"));
    }

    #[test]
    fn every_descriptor_validates() {
        for descriptor in descriptors() {
            assert!(
                descriptor.validate().is_ok(),
                "descriptor {} failed validation",
                descriptor.name()
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut registry = catalog().unwrap();
        let result = registry.register(badge::descriptor());
        assert!(matches!(
            result,
            Err(RegistryError::AlreadyRegistered(name)) if name == "Badge"
        ));
    }

    #[test]
    fn lookup_of_unknown_widget_fails() {
        let registry = catalog().unwrap();
        assert!(matches!(
            registry.get("Nonexistent"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn translated_labels_fall_back_to_english() {
        for descriptor in descriptors() {
            assert!(!descriptor.label().get("fr").is_empty());
            assert_eq!(descriptor.label().get("xx"), descriptor.label().en());
        }
    }
}
