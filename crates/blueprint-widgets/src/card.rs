//! Card: header/body/footer container with per-region padding.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

fn padding(key: &str, label: blueprint_core::Label, full: bool) -> PropertyDescriptor {
    let prop = PropertyDescriptor::select(key)
        .with_label(label)
        .with_section(Section::Style)
        .with_choice("none", fr("None", "Aucun"))
        .with_choice("sm", fr("Small (16px)", "Petit (16px)"))
        .with_choice("default", fr("Default (24px)", "Par défaut (24px)"))
        .with_choice("lg", fr("Large (32px)", "Grand (32px)"));
    let prop = if full {
        prop.with_choice("full", fr("Full (24px all sides)", "Complet (24px tous côtés)"))
    } else {
        prop
    };
    prop.with_default("default").bindable()
}

/// The card descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Card", fr("Shadcn UI Card", "Carte Shadcn UI"))
        .with_icon("square")
        .with_editor_options(EditorOptions {
            auto_by_content: true,
            sizable: true,
            ..EditorOptions::default()
        })
        .with_style_order([["headerPadding", "contentPadding", "footerPadding"]])
        .with_settings_order([
            "showHeader",
            "title",
            "description",
            "bodyContent",
            "showFooter",
            "footerContent",
            "headerPadding",
            "contentPadding",
            "footerPadding",
        ])
        .with_property(
            PropertyDescriptor::on_off("showHeader")
                .with_label(fr("Show header", "Afficher l'en-tête"))
                .with_default(true)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("title")
                .with_label(fr("Card title", "Titre de la carte"))
                .bindable()
                .with_default("Card Title")
                .hidden_when(VisibilityRule::falsy("showHeader")),
        )
        .with_property(
            PropertyDescriptor::long_text("description")
                .with_label(fr("Card description", "Description de la carte"))
                .bindable()
                .with_default("Card description goes here.")
                .hidden_when(VisibilityRule::falsy("showHeader")),
        )
        .with_property(
            PropertyDescriptor::long_text("bodyContent")
                .with_label(fr("Body content", "Contenu du corps"))
                .bindable()
                .with_default("This is the main content of the card."),
        )
        .with_property(
            PropertyDescriptor::on_off("showFooter")
                .with_label(fr("Show footer", "Afficher le pied de page"))
                .with_default(false)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::long_text("footerContent")
                .with_label(fr("Footer content", "Contenu du pied de page"))
                .bindable()
                .with_default("Footer content goes here.")
                .hidden_when(VisibilityRule::falsy("showFooter")),
        )
        .with_property(
            padding("headerPadding", fr("Header padding", "Espacement en-tête"), false)
                .hidden_when(VisibilityRule::falsy("showHeader")),
        )
        .with_property(padding(
            "contentPadding",
            fr("Content padding", "Espacement contenu"),
            true,
        ))
        .with_property(
            padding("footerPadding", fr("Footer padding", "Espacement pied de page"), true)
                .hidden_when(VisibilityRule::falsy("showFooter")),
        )
        .with_trigger_event(TriggerEvent::new("click", fr("On click", "Au clic")).as_default())
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
    fn header_fields_follow_show_header() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("showHeader".into(), json!(false));
        let view = resolve(&widget, &content);
        assert!(!view.get("title").unwrap().visible);
        assert!(!view.get("description").unwrap().visible);
        assert!(!view.get("headerPadding").unwrap().visible);
        // body is unconditional
        assert!(view.get("bodyContent").unwrap().visible);
    }

    #[test]
    fn footer_hidden_by_default_content() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("showFooter".into(), json!(false));
        let view = resolve(&widget, &content);
        assert!(!view.get("footerContent").unwrap().visible);
        assert!(!view.get("footerPadding").unwrap().visible);
    }
}
