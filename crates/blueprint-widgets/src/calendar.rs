//! Calendar: date picker with single, multiple, and range modes.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

use crate::fr;

/// The calendar descriptor.
///
/// Everything lives under a single `content` object so the whole calendar
/// state can be bound at once.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Calendar", fr("Calendar", "Calendrier"))
        .with_icon("calendar_month")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::select("mode")
                        .with_label("Mode")
                        .with_choice("single", "Single")
                        .with_choice("multiple", "Multiple")
                        .with_choice("range", "Range")
                        .with_default("single"),
                    PropertyDescriptor::text("selectedDate")
                        .with_label(fr("Selected date", "Date sélectionnée"))
                        .bindable(),
                    PropertyDescriptor::on_off("showHeader")
                        .with_label(fr("Show header", "Afficher l'en-tête"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("showFooter")
                        .with_label(fr("Show footer", "Afficher le pied"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("showToday")
                        .with_label(fr("Show today button", "Bouton aujourd'hui"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("showClear")
                        .with_label(fr("Show clear button", "Bouton effacer"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::text("minDate")
                        .with_label(fr("Minimum date", "Date minimum"))
                        .with_section(Section::Settings)
                        .bindable(),
                    PropertyDescriptor::text("maxDate")
                        .with_label(fr("Maximum date", "Date maximum"))
                        .with_section(Section::Settings)
                        .bindable(),
                ],
            )
            .with_label(fr("Calendar", "Calendrier"))
            .bindable()
            .with_default(json!({
                "mode": "single",
                "selectedDate": null,
                "showHeader": true,
                "showFooter": true,
                "showToday": true,
                "showClear": true,
                "minDate": null,
                "maxDate": null,
                "disabledDates": [],
                "events": [],
                "locale": "en",
            })),
        )
        .with_trigger_event(
            TriggerEvent::new(
                "trigger-event",
                fr("On date select", "Sur sélection de date"),
            )
            .as_default(),
        )
}
