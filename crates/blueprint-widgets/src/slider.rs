//! Slider: numeric value selection along a track.

use blueprint_core::{EditorOptions, PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The slider descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Slider", fr("Shadcn UI Slider", "Curseur Shadcn UI"))
        .with_icon("sliders-horizontal")
        .with_editor_options(EditorOptions {
            sizable: true,
            ..EditorOptions::default()
        })
        .with_property(
            PropertyDescriptor::number("value")
                .with_label(fr("Current value", "Valeur actuelle"))
                .bindable()
                .with_default(50),
        )
        .with_property(
            PropertyDescriptor::number("min")
                .with_label(fr("Minimum value", "Valeur minimum"))
                .bindable()
                .with_default(0),
        )
        .with_property(
            PropertyDescriptor::number("max")
                .with_label(fr("Maximum value", "Valeur maximum"))
                .bindable()
                .with_default(100),
        )
        .with_property(
            PropertyDescriptor::number("step")
                .with_label(fr("Step increment", "Pas d'incrément"))
                .bindable()
                .with_default(1),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled", "Désactivé"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("orientation")
                .with_label(fr("Orientation", "Orientation"))
                .with_section(Section::Style)
                .with_choice("horizontal", fr("Horizontal", "Horizontale"))
                .with_choice("vertical", fr("Vertical", "Verticale"))
                .with_default("horizontal")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small", "Petit"))
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("lg", fr("Large", "Grand"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("showValue")
                .with_label(fr("Show current value", "Afficher la valeur actuelle"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("name")
                .with_label(fr("Field name", "Nom du champ"))
                .with_section(Section::Settings)
                .bindable()
                .with_default(""),
        )
        .with_trigger_event(
            TriggerEvent::new("change", fr("On value change", "Au changement de valeur"))
                .as_default(),
        )
}
