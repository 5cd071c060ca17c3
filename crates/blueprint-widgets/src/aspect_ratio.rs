//! Aspect ratio: constrain a child element's proportions.

use blueprint_core::{
    EditorOptions, PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

/// The aspect-ratio descriptor.
///
/// The `ratio` select mixes numeric values with a `"custom"` sentinel; the
/// free-form `customRatio` field only appears when the sentinel is picked.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("AspectRatio", fr("Shadcn UI Aspect Ratio", "Ratio d'Aspect Shadcn UI"))
        .with_icon("aspect-ratio")
        .with_editor_options(EditorOptions {
            auto_by_content: true,
            sizable: true,
            ..EditorOptions::default()
        })
        .with_style_order([["ratio"], ["customRatio"]])
        .with_settings_order(["ratio", "customRatio"])
        .with_property(
            PropertyDescriptor::select("ratio")
                .with_label(fr("Aspect ratio", "Ratio d'aspect"))
                .with_section(Section::Settings)
                .with_choice(1, fr("Square (1:1)", "Carré (1:1)"))
                .with_choice(1.333, fr("Standard (4:3)", "Standard (4:3)"))
                .with_choice(1.777, fr("Widescreen (16:9)", "Grand écran (16:9)"))
                .with_choice(2.35, fr("Cinematic (21:9)", "Cinématique (21:9)"))
                .with_choice(0.75, fr("Portrait (3:4)", "Portrait (3:4)"))
                .with_choice(0.5625, fr("Vertical (9:16)", "Vertical (9:16)"))
                .with_choice("custom", fr("Custom", "Personnalisé"))
                .with_default(1.777)
                .bindable(),
        )
        .with_property(
            PropertyDescriptor::text("customRatio")
                .with_label(fr("Custom ratio", "Ratio personnalisé"))
                .with_section(Section::Settings)
                .with_placeholder("16:9 or 1.777")
                .bindable()
                .with_default("")
                .hidden_when(VisibilityRule::ne("ratio", "custom")),
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
    fn custom_ratio_hidden_for_numeric_choice() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("ratio".into(), json!(1.777));
        let view = resolve(&widget, &content);
        assert!(!view.get("customRatio").unwrap().visible);
    }

    #[test]
    fn custom_ratio_visible_for_custom_choice() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("ratio".into(), json!("custom"));
        let view = resolve(&widget, &content);
        assert!(view.get("customRatio").unwrap().visible);
    }
}
