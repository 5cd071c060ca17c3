//! Avatar: image with initials fallback and optional status dot.

use blueprint_core::{
    PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

/// The avatar descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Avatar", fr("Shadcn UI Avatar", "Avatar Shadcn UI"))
        .with_icon("user-circle")
        .with_style_order([["size"], ["variant"]])
        .with_settings_order([
            "src",
            "name",
            "alt",
            "size",
            "variant",
            "showStatus",
            "status",
            "fallbackText",
        ])
        .with_property(
            PropertyDescriptor::text("src")
                .with_label(fr("Image source", "Source de l'image"))
                .with_placeholder("https://example.com/avatar.jpg")
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::text("alt")
                .with_label(fr("Alt text", "Texte alternatif"))
                .with_placeholder("Profile picture")
                .bindable()
                .with_default("Avatar"),
        )
        .with_property(
            PropertyDescriptor::text("name")
                .with_label(fr("Name (for initials)", "Nom (pour initiales)"))
                .with_placeholder("John Doe")
                .bindable()
                .with_default("John Doe"),
        )
        .with_property(
            PropertyDescriptor::text("fallbackText")
                .with_label(fr("Custom fallback text", "Texte de secours personnalisé"))
                .with_placeholder("JD")
                .bindable()
                .with_default(""),
        )
        .with_property(
            PropertyDescriptor::select("size")
                .with_label(fr("Avatar size", "Taille de l'avatar"))
                .with_section(Section::Style)
                .with_choice("sm", fr("Small (32px)", "Petit (32px)"))
                .with_choice("default", fr("Default (40px)", "Par défaut (40px)"))
                .with_choice("lg", fr("Large (48px)", "Grand (48px)"))
                .with_choice("xl", fr("Extra Large (64px)", "Très grand (64px)"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("variant")
                .with_label(fr("Avatar variant", "Variante d'avatar"))
                .with_section(Section::Style)
                .with_choice("default", fr("Default (Round)", "Par défaut (Rond)"))
                .with_choice("square", fr("Square", "Carré"))
                .with_default("default")
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::on_off("showStatus")
                .with_label(fr("Show status indicator", "Afficher l'indicateur de statut"))
                .with_section(Section::Settings)
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::select("status")
                .with_label(fr("Status", "Statut"))
                .with_section(Section::Settings)
                .with_choice("online", fr("Online (Green)", "En ligne (Vert)"))
                .with_choice("offline", fr("Offline (Gray)", "Hors ligne (Gris)"))
                .with_choice("away", fr("Away (Yellow)", "Absent (Jaune)"))
                .with_choice("busy", fr("Busy (Red)", "Occupé (Rouge)"))
                .with_default("online")
                .bindable()
                .hidden_when(VisibilityRule::falsy("showStatus")),
        )
        .with_trigger_event(TriggerEvent::new("click", fr("On click", "Au clic")).as_default())
        .with_trigger_event(TriggerEvent::new("image-error", fr("On image error", "Sur erreur d'image")))
        .with_trigger_event(TriggerEvent::new("image-load", fr("On image load", "Sur chargement d'image")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content};
    use serde_json::json;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn status_only_visible_when_enabled() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("showStatus".into(), json!(true));
        assert!(resolve(&widget, &content).get("status").unwrap().visible);

        content.insert("showStatus".into(), json!(false));
        assert!(!resolve(&widget, &content).get("status").unwrap().visible);
    }
}
