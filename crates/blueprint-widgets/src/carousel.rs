//! Carousel: slide deck with autoplay and navigation chrome.

use blueprint_core::{PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor};
use serde_json::json;

use crate::fr;

/// The carousel descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Carousel", fr("Carousel", "Carrousel"))
        .with_icon("view_carousel")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::array(
                        "slides",
                        PropertySchema::Record(vec![
                            PropertyDescriptor::text("id").with_label("Id"),
                            PropertyDescriptor::select("type")
                                .with_label("Type")
                                .with_choice("image", "Image")
                                .with_choice("video", "Video")
                                .with_choice("content", "Content"),
                            PropertyDescriptor::text("src").with_label("Source"),
                            PropertyDescriptor::text("alt").with_label(fr("Alt text", "Texte alt")),
                            PropertyDescriptor::text("title").with_label(fr("Title", "Titre")),
                            PropertyDescriptor::long_text("description")
                                .with_label(fr("Description", "Description")),
                        ]),
                    )
                    .with_label(fr("Slides", "Diapositives"))
                    .bindable(),
                    PropertyDescriptor::on_off("autoPlay")
                        .with_label(fr("Auto play", "Lecture auto"))
                        .with_section(Section::Style)
                        .with_default(false),
                    PropertyDescriptor::number("autoPlayInterval")
                        .with_label(fr("Auto play interval (ms)", "Intervalle auto (ms)"))
                        .with_section(Section::Style)
                        .with_default(3000),
                    PropertyDescriptor::on_off("loop")
                        .with_label(fr("Loop slides", "Boucler les diapos"))
                        .with_default(true),
                    PropertyDescriptor::on_off("showArrows")
                        .with_label(fr("Show arrows", "Afficher les flèches"))
                        .with_section(Section::Style)
                        .with_default(true),
                    PropertyDescriptor::on_off("showIndicators")
                        .with_label(fr("Show indicators", "Afficher les indicateurs"))
                        .with_section(Section::Style)
                        .with_default(true),
                    PropertyDescriptor::on_off("showThumbnails")
                        .with_label(fr("Show thumbnails", "Afficher les miniatures"))
                        .with_section(Section::Style)
                        .with_default(false),
                    PropertyDescriptor::select("height")
                        .with_label(fr("Height", "Hauteur"))
                        .with_section(Section::Style)
                        .with_choice("sm", "Small")
                        .with_choice("md", "Medium")
                        .with_choice("lg", "Large")
                        .with_choice("xl", "Extra Large")
                        .with_default("md")
                        .bindable(),
                ],
            )
            .with_label(fr("Carousel", "Carrousel"))
            .bindable()
            .with_default(json!({
                "slides": [
                    {
                        "id": "slide-1",
                        "type": "image",
                        "src": "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=400&fit=crop",
                        "alt": "Mountain landscape",
                        "title": "Beautiful Mountains",
                        "description": "Stunning mountain landscape at sunset",
                    },
                    {
                        "id": "slide-2",
                        "type": "image",
                        "src": "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=400&fit=crop",
                        "alt": "Forest path",
                        "title": "Forest Trail",
                        "description": "Peaceful forest path in the morning",
                    },
                ],
                "autoPlay": false,
                "autoPlayInterval": 3000,
                "loop": true,
                "pauseOnHover": true,
                "showArrows": true,
                "showIndicators": true,
                "showThumbnails": false,
                "showPlayPause": false,
                "height": "md",
            })),
        )
        .with_trigger_event(
            TriggerEvent::new(
                "trigger-event",
                fr("On slide change", "Sur changement diapo"),
            )
            .as_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{resolve, Content, ResolvedChildren};
    use serde_json::json;

    #[test]
    fn descriptor_is_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn slide_list_resolves_per_element() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert(
            "content".into(),
            json!({
                "slides": [
                    { "id": "a", "type": "image", "title": "First" },
                    { "id": "b", "type": "video" },
                ],
            }),
        );
        let view = resolve(&widget, &content);
        let outer = match view.get("content").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Fields(inner) => inner.clone(),
            other => panic!("expected record fields, got {other:?}"),
        };
        let slides = outer.get("slides").unwrap();
        match slides.children.as_ref().unwrap() {
            ResolvedChildren::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].get("title").unwrap().value, json!("First"));
                assert_eq!(items[1].get("type").unwrap().value, json!("video"));
                assert!(items[1].get("title").unwrap().value.is_null());
            }
            other => panic!("expected list items, got {other:?}"),
        }
    }
}
