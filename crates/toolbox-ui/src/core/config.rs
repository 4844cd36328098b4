//! Page-provided runtime configuration.
//!
//! # Design
//! - Read once at startup from `window.APP_CONFIG` and never mutated afterwards.
//! - Injected into the pipeline by reference; nothing reads it ambiently.
//! - Missing fields default to empty strings so a bare page still issues requests.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while decoding the configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for [`AppConfig`].
    #[error("malformed configuration document")]
    Malformed {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable API settings shared by every invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Value sent in the `X-API-Key` header (empty when unconfigured).
    pub api_key: String,
    /// Prefix joined with each trigger endpoint.
    pub base_api: String,
}

impl AppConfig {
    /// Build a configuration from explicit values.
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_api: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_api: base_api.into(),
        }
    }

    /// Decode the `{ "apiKey": .., "baseApi": .. }` document exposed by the page.
    ///
    /// `null` and empty documents yield the default configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Malformed`] when the text is not a JSON object of strings.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(|source| ConfigError::Malformed { source })
    }
}
