//! Chart: line, bar, area, and pie charts fed by nested series data.

use blueprint_core::{
    PropertyDescriptor, PropertySchema, Section, TriggerEvent, WidgetDescriptor,
};
use serde_json::json;

use crate::fr;

/// The chart descriptor.
///
/// Series data nests two levels deep: a list of series, each holding a list
/// of labelled points.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new("Chart", fr("Chart", "Graphique"))
        .with_icon("bar_chart")
        .with_property(
            PropertyDescriptor::object(
                "content",
                vec![
                    PropertyDescriptor::select("type")
                        .with_label("Type")
                        .with_choice("line", "Line")
                        .with_choice("bar", "Bar")
                        .with_choice("area", "Area")
                        .with_choice("pie", "Pie")
                        .with_default("line"),
                    PropertyDescriptor::text("title")
                        .with_label(fr("Title", "Titre"))
                        .bindable(),
                    PropertyDescriptor::long_text("description")
                        .with_label(fr("Description", "Description"))
                        .bindable(),
                    PropertyDescriptor::array(
                        "data",
                        PropertySchema::Record(vec![
                            PropertyDescriptor::text("name")
                                .with_label(fr("Series name", "Nom série")),
                            PropertyDescriptor::color("color")
                                .with_label(fr("Color", "Couleur")),
                            PropertyDescriptor::array(
                                "data",
                                PropertySchema::Record(vec![
                                    PropertyDescriptor::text("label")
                                        .with_label(fr("Label", "Libellé")),
                                    PropertyDescriptor::number("value")
                                        .with_label(fr("Value", "Valeur")),
                                ]),
                            )
                            .with_label(fr("Points", "Points")),
                        ]),
                    )
                    .with_label(fr("Series", "Séries"))
                    .bindable(),
                    PropertyDescriptor::select("height")
                        .with_label(fr("Height", "Hauteur"))
                        .with_section(Section::Style)
                        .with_choice("sm", "Small")
                        .with_choice("md", "Medium")
                        .with_choice("lg", "Large")
                        .with_choice("xl", "Extra Large")
                        .with_default("md")
                        .bindable(),
                    PropertyDescriptor::on_off("showGrid")
                        .with_label(fr("Show grid", "Afficher grille"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("showLegend")
                        .with_label(fr("Show legend", "Afficher légende"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("showPoints")
                        .with_label(fr("Show points", "Afficher points"))
                        .with_section(Section::Style)
                        .with_default(true)
                        .bindable(),
                    PropertyDescriptor::on_off("loading")
                        .with_label(fr("Loading state", "État chargement"))
                        .with_section(Section::Settings)
                        .with_default(false)
                        .bindable(),
                ],
            )
            .with_label(fr("Chart", "Graphique"))
            .bindable()
            .with_default(json!({
                "type": "line",
                "title": "Sample Chart",
                "description": "Chart description",
                "data": [
                    {
                        "name": "Series 1",
                        "color": "hsl(220, 70%, 50%)",
                        "data": [
                            { "label": "Jan", "value": 10 },
                            { "label": "Feb", "value": 20 },
                            { "label": "Mar", "value": 15 },
                            { "label": "Apr", "value": 25 },
                            { "label": "May", "value": 30 },
                        ],
                    },
                ],
                "height": "md",
                "showGrid": true,
                "showLegend": true,
                "showPoints": true,
                "strokeWidth": 2,
                "pointSize": 3,
                "loading": false,
                "emptyText": "No data available",
            })),
        )
        .with_trigger_event(
            TriggerEvent::new(
                "trigger-event",
                fr("On data point click", "Sur clic point données"),
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
    fn series_points_resolve_two_levels_down() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert(
            "content".into(),
            json!({
                "data": [
                    {
                        "name": "Revenue",
                        "data": [{ "label": "Q1", "value": 40 }],
                    },
                ],
            }),
        );
        let view = resolve(&widget, &content);
        let fields = match view.get("content").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Fields(inner) => inner.clone(),
            other => panic!("expected record fields, got {other:?}"),
        };
        let series = match fields.get("data").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Items(items) => items.clone(),
            other => panic!("expected list items, got {other:?}"),
        };
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].get("name").unwrap().value, json!("Revenue"));
        match series[0].get("data").unwrap().children.as_ref().unwrap() {
            ResolvedChildren::Items(points) => {
                assert_eq!(points[0].get("value").unwrap().value, json!(40));
            }
            other => panic!("expected list items, got {other:?}"),
        }
    }
}
