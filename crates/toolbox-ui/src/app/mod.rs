//! Browser shell: wires page markup to the call pipeline.
//!
//! # Design
//! - The page owns its markup; this module only listens and writes into `.result` regions.
//! - Configuration is read once at startup and shared immutably.
//! - Calls run as detached local tasks; failures are rendered, then logged.

use crate::app::dom::{CALL_SELECTOR, FORM_SELECTOR, LANG_SELECTOR};
use crate::app::preferences::{LocalPreferences, browser_language, load_config};
use crate::app::regions::DomRegion;
use crate::app::transport::{FetchTransport, PerformanceClock};
use crate::components::result_panel::ResultPanel;
use crate::core::config::AppConfig;
use crate::core::language::LanguageState;
use crate::core::pipeline::{self, Invocation};
use crate::core::regions::RegionRegistry;
use crate::core::render::{RegionState, ResultLabels};
use crate::i18n::{LocaleCode, Translations};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlFormElement};
use yew::AppHandle;

mod dom;
mod language;
mod preferences;
mod regions;
mod transport;

/// Shared state behind every listener.
pub(crate) struct Toolbox {
    config: AppConfig,
    translations: Translations,
    language: LanguageState<LocalPreferences>,
    regions: RefCell<RegionRegistry<AppHandle<ResultPanel>>>,
}

impl Toolbox {
    fn new() -> Self {
        let browser = browser_language();
        Self {
            config: load_config(),
            translations: Translations::load(),
            language: LanguageState::initialize(LocalPreferences, browser.as_deref()),
            regions: RefCell::new(RegionRegistry::default()),
        }
    }

    fn labels(&self) -> Rc<ResultLabels> {
        Rc::new(ResultLabels::resolve(
            &self.translations,
            self.language.current().code(),
        ))
    }

    pub(crate) fn show(&self, element: &Element, state: RegionState) {
        let labels = self.labels();
        self.regions.borrow_mut().show(element, state, labels);
    }

    fn apply_language(&self) {
        language::apply(&self.translations, self.language.current());
        let labels = self.labels();
        self.regions.borrow_mut().relabel(&labels);
    }

    fn select_language(&self, locale: LocaleCode) {
        self.language.select(locale);
        self.apply_language();
    }

    /// Resolve `trigger` and start its call; inert triggers do nothing.
    fn invoke(self: &Rc<Self>, trigger: &Element) {
        let form = dom::enclosing_form(trigger);
        let invocation = Invocation::from_trigger(
            trigger,
            form.as_ref().map(|form| {
                let element: &Element = form;
                (element, dom::collect_fields(form))
            }),
        );
        let Some(invocation) = invocation else {
            return;
        };
        let Some(element) = dom::output_region(form.as_ref()) else {
            console::warn!("no result region for", invocation.contract.endpoint.clone());
            return;
        };

        let toolbox = Rc::clone(self);
        spawn_local(async move {
            let mut region = DomRegion {
                toolbox: Rc::clone(&toolbox),
                element,
            };
            if let Err(err) = pipeline::run(
                &invocation,
                &toolbox.config,
                &FetchTransport,
                &PerformanceClock,
                &mut region,
            )
            .await
            {
                console::error!(
                    "request failed",
                    invocation.contract.endpoint.clone(),
                    err.to_string()
                );
            }
        });
    }
}

/// Wasm entry point: translate the page and start listening for triggers.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let toolbox = Rc::new(Toolbox::new());
    toolbox.apply_language();
    listen_for_clicks(&toolbox);
    listen_for_submits(&toolbox);
}

fn listen_for_clicks(toolbox: &Rc<Toolbox>) {
    let toolbox = Rc::clone(toolbox);
    EventListener::new_with_options(
        &document(),
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            if let Some(selector) = dom::closest(&target, LANG_SELECTOR) {
                let locale = selector
                    .get_attribute("data-lang")
                    .as_deref()
                    .and_then(LocaleCode::from_lang_tag);
                if let Some(locale) = locale {
                    event.prevent_default();
                    toolbox.select_language(locale);
                }
                return;
            }
            if let Some(trigger) = dom::closest(&target, CALL_SELECTOR) {
                event.prevent_default();
                toolbox.invoke(&trigger);
            }
        },
    )
    .forget();
}

fn listen_for_submits(toolbox: &Rc<Toolbox>) {
    for element in dom::select_all(FORM_SELECTOR) {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let toolbox = Rc::clone(toolbox);
        let trigger: Element = form.clone().into();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                toolbox.invoke(&trigger);
            },
        )
        .forget();
    }
}
