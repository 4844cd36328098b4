#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Toolbox web console.
//! Reads declarative `data-*` contracts from page markup, calls the API and renders
//! each response as a summary strip, a structured tree and raw JSON.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::render::{ChipKind, ResultView};
    use crate::core::transport::{InboundResult, parse_body};
    use crate::i18n::{LocaleCode, Translations};

    #[test]
    fn translation_fallbacks_work() {
        let translations = Translations::load();
        assert_eq!(translations.text("nav.home", "fr", "Start"), "Home");
        assert_eq!(translations.text("nav.missing_key", "en", "Default"), "Default");
        assert_eq!(translations.text("nav.home", LocaleCode::Zh.code(), "Start"), "首页");
    }

    #[test]
    fn non_json_body_flows_through_to_view() {
        let result = InboundResult {
            status: 204,
            client_duration_ms: 0.4,
            body: parse_body(String::new()),
        };
        let view = ResultView::from_result(&result);
        assert!(view.tree.is_some());
        assert_eq!(view.chip(ChipKind::Status).map(|c| c.value.as_str()), Some("204"));
    }
}
