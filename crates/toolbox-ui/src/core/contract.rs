//! Declarative trigger contracts read from element attributes.
//!
//! # Design
//! - Parsing is a pure step over an [`AttributeSource`]; the DOM is only one implementation.
//! - A trigger that declares its own endpoint owns the contract, otherwise the enclosing
//!   form does.
//! - A missing or empty endpoint makes the trigger inert (`None`), never an error.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Attribute naming the endpoint path appended to the configured base.
pub const ATTR_ENDPOINT: &str = "data-endpoint";
/// Attribute naming the HTTP method.
pub const ATTR_METHOD: &str = "data-method";
/// Attribute naming a field whose value is a raw query string.
pub const ATTR_QUERY_FIELD: &str = "data-query-field";
/// Attribute enabling raw-body mode when set to `"true"`.
pub const ATTR_RAW_BODY: &str = "data-raw-body";
/// Method used when none is declared.
pub const DEFAULT_METHOD: &str = "GET";

/// Read-only view over the attributes of a trigger or form.
pub trait AttributeSource {
    /// Value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Endpoint, method and field-handling rules for one invokable action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerContract {
    /// Endpoint path, never empty.
    pub endpoint: String,
    /// Upper-cased HTTP method.
    pub method: String,
    /// Field whose value is merged into the URL as a raw query string.
    pub query_field: Option<String>,
    /// Send the `raw` field verbatim instead of JSON-encoding the field set.
    pub raw_body: bool,
}

impl TriggerContract {
    /// Resolve the contract owning `trigger`.
    ///
    /// The trigger's own attributes win when it declares an endpoint; otherwise the
    /// enclosing `form` supplies them. Returns `None` for an inert trigger.
    #[must_use]
    pub fn resolve<T, F>(trigger: &T, form: Option<&F>) -> Option<Self>
    where
        T: AttributeSource + ?Sized,
        F: AttributeSource + ?Sized,
    {
        Self::from_source(trigger).or_else(|| form.and_then(Self::from_source))
    }

    /// Parse a contract from a single attribute source.
    #[must_use]
    pub fn from_source<A: AttributeSource + ?Sized>(source: &A) -> Option<Self> {
        let endpoint = non_empty(source.attribute(ATTR_ENDPOINT))?;
        let method = non_empty(source.attribute(ATTR_METHOD))
            .map_or_else(|| DEFAULT_METHOD.to_string(), |method| method.to_ascii_uppercase());
        Some(Self {
            endpoint,
            method,
            query_field: non_empty(source.attribute(ATTR_QUERY_FIELD)),
            raw_body: source.attribute(ATTR_RAW_BODY).as_deref() == Some("true"),
        })
    }

    /// Whether the contract issues a `GET`.
    #[must_use]
    pub fn is_get(&self) -> bool {
        self.method == DEFAULT_METHOD
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
