//! Alert dialog: a modal confirmation prompt, optionally gated on typed
//! confirmation text.

use blueprint_core::{
    PropertyDescriptor, Section, TriggerEvent, VisibilityRule, WidgetDescriptor,
};

use crate::fr;

/// The alert-dialog descriptor.
pub fn descriptor() -> WidgetDescriptor {
    WidgetDescriptor::new(
        "AlertDialog",
        fr("Shadcn UI Alert Dialog", "Dialogue d'Alerte Shadcn UI"),
    )
    .with_icon("exclamation-triangle")
    .with_style_order([["variant"], ["size"]])
    .with_settings_order([
        "isOpen",
        "title",
        "description",
        "variant",
        "showCancel",
        "cancelLabel",
        "confirmLabel",
        "requireConfirmation",
        "confirmationLabel",
        "confirmationPlaceholder",
        "confirmationMatch",
    ])
    .with_property(
        PropertyDescriptor::on_off("isOpen")
            .with_label(fr("Show dialog", "Afficher le dialogue"))
            .with_section(Section::Settings)
            .bindable()
            .with_default(false),
    )
    .with_property(
        PropertyDescriptor::text("title")
            .with_label(fr("Dialog title", "Titre du dialogue"))
            .bindable()
            .with_default("Are you absolutely sure?"),
    )
    .with_property(
        PropertyDescriptor::long_text("description")
            .with_label(fr("Dialog description", "Description du dialogue"))
            .bindable()
            .with_default(
                "This action cannot be undone. This will permanently delete your \
                 account and remove your data from our servers.",
            ),
    )
    .with_property(
        PropertyDescriptor::select("variant")
            .with_label(fr("Dialog variant", "Variante du dialogue"))
            .with_section(Section::Settings)
            .with_choice("default", fr("Default", "Défaut"))
            .with_choice("destructive", fr("Destructive (Delete/Danger)", "Destructif (Supprimer/Danger)"))
            .with_choice("warning", fr("Warning", "Avertissement"))
            .with_choice("info", fr("Information", "Information"))
            .with_choice("success", fr("Success", "Succès"))
            .with_default("destructive")
            .bindable(),
    )
    .with_property(
        PropertyDescriptor::on_off("showCancel")
            .with_label(fr("Show cancel button", "Afficher le bouton d'annulation"))
            .with_section(Section::Settings)
            .with_default(true)
            .bindable(),
    )
    .with_property(
        PropertyDescriptor::text("cancelLabel")
            .with_label(fr("Cancel button text", "Texte du bouton d'annulation"))
            .bindable()
            .with_default("Cancel")
            .hidden_when(VisibilityRule::falsy("showCancel")),
    )
    .with_property(
        PropertyDescriptor::text("confirmLabel")
            .with_label(fr("Confirm button text", "Texte du bouton de confirmation"))
            .bindable()
            .with_default("Continue"),
    )
    .with_property(
        PropertyDescriptor::on_off("requireConfirmation")
            .with_label(fr("Require confirmation input", "Exiger une saisie de confirmation"))
            .with_section(Section::Settings)
            .with_default(false)
            .bindable(),
    )
    .with_property(
        PropertyDescriptor::text("confirmationLabel")
            .with_label(fr("Confirmation input label", "Label de saisie de confirmation"))
            .bindable()
            .with_default("Type 'delete' to confirm")
            .hidden_when(VisibilityRule::falsy("requireConfirmation")),
    )
    .with_property(
        PropertyDescriptor::text("confirmationPlaceholder")
            .with_label(fr("Confirmation input placeholder", "Placeholder de saisie de confirmation"))
            .bindable()
            .with_default("delete")
            .hidden_when(VisibilityRule::falsy("requireConfirmation")),
    )
    .with_property(
        PropertyDescriptor::text("confirmationMatch")
            .with_label(fr("Required confirmation text", "Texte de confirmation requis"))
            .bindable()
            .with_default("delete")
            .hidden_when(VisibilityRule::falsy("requireConfirmation")),
    )
    .with_trigger_event(TriggerEvent::new("confirm", fr("On confirm", "Sur confirmation")).as_default())
    .with_trigger_event(TriggerEvent::new("cancel", fr("On cancel", "Sur annulation")))
    .with_trigger_event(TriggerEvent::new("close", fr("On close", "Sur fermeture")))
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
    fn confirmation_fields_hidden_until_required() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("requireConfirmation".into(), json!(false));
        let view = resolve(&widget, &content);

        let label = view.get("confirmationLabel").unwrap();
        assert!(!label.visible);
        // still resolved: the default remains available to the editor
        assert_eq!(label.value, json!("Type 'delete' to confirm"));
        assert!(!view.get("confirmationPlaceholder").unwrap().visible);
        assert!(!view.get("confirmationMatch").unwrap().visible);
    }

    #[test]
    fn cancel_label_follows_show_cancel() {
        let widget = descriptor();
        let mut content = Content::new();
        content.insert("showCancel".into(), json!(true));
        let view = resolve(&widget, &content);
        assert!(view.get("cancelLabel").unwrap().visible);
    }

    #[test]
    fn confirm_is_the_default_event() {
        let widget = descriptor();
        let events = widget.trigger_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events.default_event().map(|e| e.name()), Some("confirm"));
    }
}
