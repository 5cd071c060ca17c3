//! Input: single-line text entry with type and size variants.

use blueprint_core::{PropertyDescriptor, Section, TriggerEvent, WidgetDescriptor};

use crate::fr;

/// The input descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Input", fr("Shadcn UI Input", "Champ de Saisie Shadcn UI"))
        .with_icon("text-box")
        .with_property(
            PropertyDescriptor::text("value")
                .with_label(fr("Field value", "Valeur du champ"))
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::text("placeholder")
                .with_label(fr("Placeholder", "Texte indicatif"))
                .bindable()
                .with_default("Enter text..."),
        )
        .with_property(
            PropertyDescriptor::select("type")
                .with_label(fr("Input type", "Type de champ"))
                .with_section(Section::Settings)
                .with_choice("text", fr("Text", "Texte"))
                .with_choice("email", fr("Email", "Email"))
                .with_choice("password", fr("Password", "Mot de passe"))
                .with_choice("number", fr("Number", "Nombre"))
                .with_choice("tel", fr("Phone", "Téléphone"))
                .with_choice("url", fr("URL", "URL"))
                .with_choice("search", fr("Search", "Recherche"))
                .with_default("text")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled", "Désactivé"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("readonly")
                .with_label(fr("Read only", "Lecture seule"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("required")
                .with_label(fr("Required", "Obligatoire"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small (32px)", "Petit (32px)"))
                .with_choice("default", fr("Default (40px)", "Par défaut (40px)"))
                .with_choice("lg", fr("Large (48px)", "Grand (48px)"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Variant", "Variante"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("ghost", fr("Ghost (borderless)", "Fantôme (sans bordure)"))
                .with_default("default")
                .bindable(),
        )
        .with_trigger_event(TriggerEvent::new("input", fr("On input", "À la saisie")).as_default())
        .with_trigger_event(TriggerEvent::new("change", fr("On change", "Au changement")))
        .with_trigger_event(TriggerEvent::new("focus", fr("On focus", "Au focus")))
        .with_trigger_event(TriggerEvent::new("blur", fr("On blur", "À la perte de focus")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn input_is_the_default_event() {
        let widget = descriptor();
        assert_eq!(widget.trigger_events().len(), 4);
        assert_eq!(
            widget.trigger_events().default_event().unwrap().name(),
            "input"
        );
    }
}
