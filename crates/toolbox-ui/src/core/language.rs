//! Current-language cell with a single persisting writer.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use std::cell::Cell;

/// Storage for the last explicitly selected language tag.
pub trait PreferenceStore {
    /// Previously persisted tag, if any.
    fn load_language(&self) -> Option<String>;
    /// Persist `tag` immediately.
    fn save_language(&self, tag: &str);
}

/// Process-wide current language, scoped to whoever owns this value.
#[derive(Debug)]
pub struct LanguageState<S> {
    current: Cell<LocaleCode>,
    store: S,
}

impl<S: PreferenceStore> LanguageState<S> {
    /// Initial language: persisted preference, else the browser language, else the default.
    ///
    /// Unsupported tags at either step fall through to the next one.
    pub fn initialize(store: S, browser_language: Option<&str>) -> Self {
        let initial = store
            .load_language()
            .as_deref()
            .and_then(LocaleCode::from_lang_tag)
            .or_else(|| browser_language.and_then(LocaleCode::from_lang_tag))
            .unwrap_or(DEFAULT_LOCALE);
        Self {
            current: Cell::new(initial),
            store,
        }
    }

    /// Currently active locale.
    pub const fn current(&self) -> LocaleCode {
        self.current.get()
    }

    /// Switch to `locale` and persist the choice.
    pub fn select(&self, locale: LocaleCode) {
        self.current.set(locale);
        self.store.save_language(locale.code());
    }
}
