//! Persistence and environment helpers for the app shell.

use crate::core::config::AppConfig;
use crate::core::language::PreferenceStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use js_sys::{JSON, Reflect};
use wasm_bindgen::JsValue;

pub(crate) const LANGUAGE_KEY: &str = "toolbox.lang";
pub(crate) const CONFIG_GLOBAL: &str = "APP_CONFIG";

/// Language preference backed by `localStorage`.
pub(crate) struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn load_language(&self) -> Option<String> {
        LocalStorage::get::<String>(LANGUAGE_KEY).ok()
    }

    fn save_language(&self, tag: &str) {
        set_storage(LANGUAGE_KEY, tag);
    }
}

pub(crate) fn browser_language() -> Option<String> {
    window().navigator().language()
}

/// Read the page-injected configuration object, falling back to defaults.
pub(crate) fn load_config() -> AppConfig {
    let value = match Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        Ok(_) => return AppConfig::default(),
        Err(err) => {
            console::error!("config lookup failed", err);
            return AppConfig::default();
        }
    };
    let text = match JSON::stringify(&value) {
        Ok(text) => String::from(text),
        Err(err) => {
            console::error!("config is not serializable", err);
            return AppConfig::default();
        }
    };
    AppConfig::from_json(&text).unwrap_or_else(|err| {
        console::error!("config rejected", err.to_string());
        AppConfig::default()
    })
}

fn set_storage(key: &'static str, value: &str) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", "set", key, err.to_string());
    }
}
