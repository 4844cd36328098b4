//! DOM lookups shared by the event wiring.

use crate::core::contract::AttributeSource;
use crate::core::fields::FieldSet;
use gloo::console;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

pub(crate) const CALL_SELECTOR: &str = "[data-action=\"call\"]";
pub(crate) const LANG_SELECTOR: &str = "[data-lang]";
pub(crate) const FORM_SELECTOR: &str = "form.api-form";
pub(crate) const RESULT_SELECTOR: &str = ".result";

impl AttributeSource for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Nearest ancestor (or `element` itself) matching `selector`.
pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn enclosing_form(element: &Element) -> Option<HtmlFormElement> {
    closest(element, FORM_SELECTOR)?.dyn_into().ok()
}

/// Every element in the page matching `selector`, in document order.
pub(crate) fn select_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Snapshot of a form's text fields; file inputs are skipped.
pub(crate) fn collect_fields(form: &HtmlFormElement) -> FieldSet {
    let mut fields = FieldSet::new();
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            console::error!("form data unavailable", err);
            return fields;
        }
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return fields;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    fields
}

/// Region a call renders into: the `.result` beside its form, else the page's first one.
pub(crate) fn output_region(form: Option<&HtmlFormElement>) -> Option<Element> {
    form.and_then(|form| form.parent_element())
        .and_then(|parent| parent.query_selector(RESULT_SELECTOR).ok().flatten())
        .or_else(|| document().query_selector(RESULT_SELECTOR).ok().flatten())
}
