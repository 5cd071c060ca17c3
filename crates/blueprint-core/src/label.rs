//! Localized editor labels.
//!
//! Every user-facing string in a descriptor (property labels, select-choice
//! labels, trigger-event labels) is a [`Label`]: an English text plus any
//! number of per-locale translations. The builder UI picks the active locale
//! and falls back to English when no translation exists.

use std::collections::BTreeMap;

use serde::Serialize;

/// A localized piece of editor text.
///
/// English is the required base text; additional locales are attached with
/// [`Label::with_locale`].
///
/// # Example
///
/// ```
/// use blueprint_core::Label;
///
/// let label = Label::new("On click").with_locale("fr", "Au clic");
/// assert_eq!(label.get("fr"), "Au clic");
/// assert_eq!(label.get("de"), "On click");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    en: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    translations: BTreeMap<String, String>,
}

impl Label {
    /// Create a label from its English text.
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Attach a translation for the given locale (e.g. `"fr"`).
    pub fn with_locale(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(locale.into(), text.into());
        self
    }

    /// The English base text.
    pub fn en(&self) -> &str {
        &self.en
    }

    /// The text for `locale`, falling back to English.
    pub fn get(&self, locale: &str) -> &str {
        match locale {
            "en" => &self.en,
            _ => self.translations.get(locale).map_or(&self.en, String::as_str),
        }
    }

    /// Locales with an explicit translation, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

impl From<&str> for Label {
    fn from(en: &str) -> Self {
        Label::new(en)
    }
}

impl From<String> for Label {
    fn from(en: String) -> Self {
        Label::new(en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_translation_when_present() {
        let label = Label::new("Title").with_locale("fr", "Titre");
        assert_eq!(label.get("fr"), "Titre");
    }

    #[test]
    fn get_falls_back_to_english() {
        let label = Label::new("Title").with_locale("fr", "Titre");
        assert_eq!(label.get("es"), "Title");
        assert_eq!(label.get("en"), "Title");
    }

    #[test]
    fn locales_lists_translations_only() {
        let label = Label::new("Title")
            .with_locale("fr", "Titre")
            .with_locale("de", "Titel");
        let locales: Vec<_> = label.locales().collect();
        assert_eq!(locales, ["de", "fr"]);
    }
}
