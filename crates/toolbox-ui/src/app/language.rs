//! Page-wide translation pass for static markup.

use crate::app::dom::{LANG_SELECTOR, select_all};
use crate::i18n::{LocaleCode, Translations};
use gloo::console;
use gloo::utils::document;

const I18N_ATTR: &str = "data-i18n";
const I18N_PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
const LANG_ATTR: &str = "data-lang";

/// Rewrite every translatable node and mark the active language selector.
pub(crate) fn apply(translations: &Translations, locale: LocaleCode) {
    let lang = locale.code();
    for element in select_all("[data-i18n]") {
        if let Some(path) = element.get_attribute(I18N_ATTR) {
            element.set_text_content(Some(&translations.text_or_path(&path, lang)));
        }
    }
    for element in select_all("[data-i18n-placeholder]") {
        if let Some(path) = element.get_attribute(I18N_PLACEHOLDER_ATTR) {
            let text = translations.text_or_path(&path, lang);
            if let Err(err) = element.set_attribute("placeholder", &text) {
                console::error!("placeholder update failed", path, err);
            }
        }
    }
    for element in select_all(LANG_SELECTOR) {
        let active = element
            .get_attribute(LANG_ATTR)
            .as_deref()
            .and_then(LocaleCode::from_lang_tag)
            == Some(locale);
        if let Err(err) = element.class_list().toggle_with_force("active", active) {
            console::error!("selector state update failed", err);
        }
        let pressed = if active { "true" } else { "false" };
        if let Err(err) = element.set_attribute("aria-pressed", pressed) {
            console::error!("selector state update failed", err);
        }
    }
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.set_attribute("lang", lang) {
        console::error!("document language update failed", err);
    }
}
