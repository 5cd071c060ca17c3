//! Button: the primary action control, with loading and icon states.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

/// The button descriptor.
///
/// Icon and loading states interlock: the loading spinner replaces any icon,
/// so the icon controls disappear while `loading` is on.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Button", fr("Shadcn UI Button", "Bouton Shadcn UI"))
        .with_icon("fa-regular fa-square")
        .with_editor_options(EditorOptions {
            sizable: true,
            hyperlink: true,
            ..EditorOptions::default()
        })
        .with_style_order([
            vec!["variant", "size"],
            vec!["disabled", "loading"],
            vec!["leftIcon", "rightIcon"],
        ])
        .with_settings_order([
            "text",
            "variant",
            "size",
            "showIcon",
            "iconName",
            "loading",
            "loadingText",
            "disabled",
            "buttonType",
        ])
        .with_property(
            PropertyDescriptor::text("text")
                .with_label(fr("Button text", "Texte du bouton"))
                .with_placeholder("Click me")
                .bindable()
                .with_default("Button"),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Variant", "Variante"))
                .with_section(Section::Style)
                .with_choice("primary", fr("Primary", "Principal"))
                .with_choice("secondary", fr("Secondary", "Secondaire"))
                .with_choice("destructive", fr("Destructive", "Destructif"))
                .with_choice("outline", fr("Outline", "Contour"))
                .with_choice("ghost", fr("Ghost", "Fantôme"))
                .with_choice("link", fr("Link", "Lien"))
                .with_default("primary"),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Size", "Taille"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small (36px)", "Petit (36px)"))
                .with_choice("default", fr("Default (40px)", "Par défaut (40px)"))
                .with_choice("lg", fr("Large (44px)", "Grand (44px)"))
                .with_default("default"),
        )
        .with_property(
            PropertyDescriptor::on_off("loading")
                .with_label(fr("Loading state", "État de chargement"))
                .with_section(Section::Behavior)
                .bindable()
                .with_default(false),
        )
        .with_property(
            PropertyDescriptor::text("loadingText")
                .with_label(fr("Loading text", "Texte de chargement"))
                .with_placeholder("Loading...")
                .bindable()
                .with_default("Loading...")
                .hidden_when(VisibilityRule::falsy("loading")),
        )
        .with_property(
            PropertyDescriptor::on_off("showIcon")
                .with_label(fr("Show icon", "Afficher l'icône"))
                .with_default(false)
                .bindable()
                .hidden_when(VisibilityRule::truthy("loading")),
        )
        .with_property(
            PropertyDescriptor::text("iconName")
                .with_label(fr("Icon name", "Nom de l'icône"))
                .with_placeholder("home, star, heart, trash, settings, search...")
                .bindable()
                .hidden_when(VisibilityRule::any_of([
                    VisibilityRule::falsy("showIcon"),
                    VisibilityRule::truthy("loading"),
                ])),
        )
        .with_property(
            PropertyDescriptor::on_off("disabled")
                .with_label(fr("Disabled state", "État désactivé"))
                .with_section(Section::Behavior)
                .bindable()
                .with_default(false),
        )
        .with_property(
            PropertyDescriptor::select("buttonType")
                .with_label(fr("Button type", "Type de bouton"))
                .with_section(Section::Behavior)
                .with_choice("button", fr("Button", "Bouton"))
                .with_choice("submit", fr("Submit", "Soumettre"))
                .with_choice("reset", fr("Reset", "Réinitialiser"))
                .with_default("button"),
        )
        .with_trigger_event(TriggerEvent::new("trigger-event", fr("On click", "Au clic")).as_default())
}
