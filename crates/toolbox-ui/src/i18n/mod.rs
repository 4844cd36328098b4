//! Lightweight JSON-backed translations with per-locale tables.
//!
//! # Design
//! - Tables are embedded at compile time and parsed once per [`Translations`] value.
//! - Unknown language tags read from the default table; a missing key is `None`, never an error.
//! - Callers pick their own fallback (a literal default or the dotted path itself).

use serde_json::Value;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Chinese (Simplified).
    Zh,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Zh]
    }

    /// Two-letter tag used for storage, `<html lang>` and `data-lang` selectors.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Human-friendly label for selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }

    /// Map an arbitrary browser language tag (`zh-CN`, `en_US`, `ZH`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Parsed translation tables for every supported locale.
#[derive(Clone, Debug)]
pub struct Translations {
    en: Value,
    zh: Value,
}

impl Default for Translations {
    fn default() -> Self {
        Self::load()
    }
}

impl Translations {
    /// Parse the embedded tables. A table that fails to parse behaves as empty.
    #[must_use]
    pub fn load() -> Self {
        Self::from_tables(raw_locale(LocaleCode::En), raw_locale(LocaleCode::Zh))
    }

    /// Build from caller-provided JSON documents.
    #[must_use]
    pub fn from_tables(en: &str, zh: &str) -> Self {
        Self {
            en: serde_json::from_str(en).unwrap_or(Value::Null),
            zh: serde_json::from_str(zh).unwrap_or(Value::Null),
        }
    }

    /// Resolve a dotted path (`section.key`) in the table for `lang`.
    ///
    /// Unknown tags read from the [`DEFAULT_LOCALE`] table. Returns `None` when the
    /// path is missing or points at something other than a string.
    #[must_use]
    pub fn resolve(&self, path: &str, lang: &str) -> Option<&str> {
        let locale = LocaleCode::from_lang_tag(lang).unwrap_or(DEFAULT_LOCALE);
        resolve(self.table(locale), path)
    }

    /// Resolve with a caller default.
    #[must_use]
    pub fn text(&self, path: &str, lang: &str, default: &str) -> String {
        self.resolve(path, lang).unwrap_or(default).to_string()
    }

    /// Resolve, passing the dotted path through verbatim when unresolved.
    #[must_use]
    pub fn text_or_path(&self, path: &str, lang: &str) -> String {
        self.resolve(path, lang).unwrap_or(path).to_string()
    }

    const fn table(&self, locale: LocaleCode) -> &Value {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Zh => &self.zh,
        }
    }
}

fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_reads_default_table() {
        let translations = Translations::load();
        assert_eq!(
            translations.resolve("pages.hash.title", "fr"),
            translations.resolve("pages.hash.title", "en")
        );
        assert!(translations.resolve("pages.hash.title", "en").is_some());
    }

    #[test]
    fn missing_key_is_absent() {
        let translations = Translations::load();
        assert_eq!(translations.resolve("nav.nonexistent", "en"), None);
        assert_eq!(translations.text("nav.nonexistent", "en", "fallback"), "fallback");
        assert_eq!(
            translations.text_or_path("nav.nonexistent", "zh"),
            "nav.nonexistent"
        );
    }

    #[test]
    fn non_string_leaf_is_absent() {
        let translations = Translations::load();
        assert_eq!(translations.resolve("pages.hash", "en"), None);
        assert_eq!(translations.resolve("", "en"), None);
    }

    #[test]
    fn chinese_table_is_used_for_zh_tags() {
        let translations = Translations::load();
        assert_eq!(translations.resolve("nav.home", "zh"), Some("首页"));
        assert_eq!(translations.resolve("nav.home", "zh-TW"), Some("首页"));
        assert_eq!(translations.resolve("nav.home", "en-US"), Some("Home"));
    }

    #[test]
    fn malformed_table_behaves_as_empty() {
        let translations = Translations::from_tables("{not json", r#"{"a":{"b":"c"}}"#);
        assert_eq!(translations.resolve("a.b", "en"), None);
        assert_eq!(translations.resolve("a.b", "zh"), Some("c"));
    }

    #[test]
    fn lang_tags_map_by_primary_subtag() {
        assert_eq!(LocaleCode::from_lang_tag("zh-CN"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("zh_Hant"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("EN-gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn every_locale_labels_its_languages() {
        let translations = Translations::load();
        for locale in LocaleCode::all() {
            assert!(translations.resolve("result.loading", locale.code()).is_some());
            assert_eq!(
                translations.resolve(&format!("lang.{}", locale.code()), "en"),
                Some(locale.label())
            );
        }
    }
}
