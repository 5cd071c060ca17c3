//! Badge: a small status pill, optionally dismissible and iconned.

use blueprint_core::{
    PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

/// The badge descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Badge", fr("Shadcn UI Badge", "Badge Shadcn UI"))
        .with_icon("tag")
        .with_style_order([vec!["variant", "size"], vec!["dismissible"]])
        .with_settings_order([
            "text",
            "variant",
            "size",
            "dismissible",
            "showIcon",
            "iconName",
            "iconPosition",
        ])
        .with_property(
            PropertyDescriptor::text("text")
                .with_label(fr("Badge text", "Texte du badge"))
                .with_placeholder("Badge")
                .bindable()
                .with_default("Badge"),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Badge variant", "Variante du badge"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default (Dark)", "Par défaut (Sombre)"))
                .with_choice("secondary", fr("Secondary (Light)", "Secondaire (Clair)"))
                .with_choice("destructive", fr("Destructive (Red)", "Destructif (Rouge)"))
                .with_choice("outline", fr("Outline (Border)", "Contour (Bordure)"))
                .with_choice("success", fr("Success (Green)", "Succès (Vert)"))
                .with_choice("warning", fr("Warning (Yellow)", "Avertissement (Jaune)"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Badge size", "Taille du badge"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small", "Petit"))
                .with_choice("default", fr("Default", "Par défaut"))
                .with_choice("lg", fr("Large", "Grand"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("dismissible")
                .with_label(fr("Dismissible (closable)", "Supprimable (fermable)"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("showIcon")
                .with_label(fr("Show icon", "Afficher l'icône"))
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("iconName")
                .with_label(fr("Icon name", "Nom de l'icône"))
                .with_placeholder("star, heart, check, info, alert...")
                .bindable()
                .with_default("star")
                .hidden_when(VisibilityRule::falsy("showIcon")),
        )
        .with_property(
            PropertyDescriptor::select("iconPosition")
                .with_label(fr("Icon position", "Position de l'icône"))
                .with_choice("left", fr("Left", "Gauche"))
                .with_choice("right", fr("Right", "Droite"))
                .with_default("left")
                .bindable()
                .hidden_when(VisibilityRule::falsy("showIcon")),
        )
        .with_trigger_event(TriggerEvent::new("click", fr("On click", "Au clic")).as_default())
        .with_trigger_event(TriggerEvent::new("dismiss", fr("On dismiss", "Sur suppression")))
}
