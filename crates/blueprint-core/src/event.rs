//! Trigger-event declarations.
//!
//! Each widget exposes the events the host runtime can bind handlers to
//! (`click`, `dismiss`, `close`, ...). At most one event per widget is the
//! default binding target; [`TriggerEvents::duplicate_default`] backs the
//! load-time check that rejects ambiguous descriptors.

use serde::Serialize;

use crate::label::Label;

/// One event a widget can emit to the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerEvent {
    name: String,
    label: Label,
    is_default: bool,
}

impl TriggerEvent {
    /// Create an event from its wire name and editor label.
    pub fn new(name: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            is_default: false,
        }
    }

    /// Mark this event as the widget's default binding target.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// The wire name the host binds handlers by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The editor label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Whether this is the default binding target.
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Ordered table of a widget's trigger events.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TriggerEvents {
    events: Vec<TriggerEvent>,
}

impl TriggerEvents {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, preserving declaration order.
    pub(crate) fn push(&mut self, event: TriggerEvent) {
        self.events.push(event);
    }

    /// Look an event up by wire name.
    pub fn get(&self, name: &str) -> Option<&TriggerEvent> {
        self.events.iter().find(|event| event.name() == name)
    }

    /// The default binding target, if one is declared.
    pub fn default_event(&self) -> Option<&TriggerEvent> {
        self.events.iter().find(|event| event.is_default())
    }

    /// The first pair of events both marked default, if the table is
    /// ambiguous. Descriptor validation turns this into a hard error.
    pub fn duplicate_default(&self) -> Option<(&str, &str)> {
        let mut first: Option<&str> = None;
        for event in self.events.iter().filter(|event| event.is_default()) {
            match first {
                None => first = Some(event.name()),
                Some(name) => return Some((name, event.name())),
            }
        }
        None
    }

    /// Iterate the events in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TriggerEvent> {
        self.events.iter()
    }

    /// Number of declared events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the widget declares no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
