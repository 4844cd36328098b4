//! Outbound request assembly from a contract and its form fields.

use crate::core::config::AppConfig;
use crate::core::contract::TriggerContract;
use crate::core::fields::FieldSet;
use crate::core::query::{QueryParams, append_query, parse_query_string};

/// Header carrying the configured API key on every request.
pub const HEADER_API_KEY: &str = "X-API-Key";
/// Content type header name.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// Content type declared whenever a body is sent.
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Field sent verbatim in raw-body mode.
pub const RAW_FIELD: &str = "raw";

/// Fully assembled HTTP request, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Base + endpoint + assembled query string.
    pub url: String,
    /// Upper-cased method.
    pub method: String,
    /// Headers in the order they were attached.
    pub headers: Vec<(String, String)>,
    /// Body text; `None` for `GET` and for form-less triggers.
    pub body: Option<String>,
}

impl OutboundRequest {
    /// Value of the named header, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Assemble the request for `contract`.
///
/// `fields` is `None` when the trigger does not belong to a form; such triggers
/// never send a body. A declared query field is consumed into the URL when
/// non-empty and removed from the field set either way. `GET` requests drop
/// empty fields from the query; other methods send either the `raw` field or the
/// JSON-encoded remaining fields.
#[must_use]
pub fn build_request(
    contract: &TriggerContract,
    fields: Option<FieldSet>,
    config: &AppConfig,
) -> OutboundRequest {
    let mut url = format!("{}{}", config.base_api, contract.endpoint);
    let mut headers = vec![(HEADER_API_KEY.to_string(), config.api_key.clone())];
    let mut body = None;

    if let Some(mut fields) = fields {
        if let Some(query_field) = contract.query_field.as_deref()
            && let Some(raw_query) = fields.remove(query_field).filter(|raw| !raw.is_empty())
        {
            append_query(&mut url, &parse_query_string(&raw_query));
        }

        if contract.is_get() {
            let params: QueryParams = fields.iter().filter(|(_, value)| !value.is_empty()).collect();
            append_query(&mut url, &params);
        } else {
            let payload = if contract.raw_body {
                fields.get(RAW_FIELD).unwrap_or_default().to_string()
            } else {
                json_body(&fields)
            };
            headers.push((HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string()));
            body = Some(payload);
        }
    }

    OutboundRequest {
        url,
        method: contract.method.clone(),
        headers,
        body,
    }
}

fn json_body(fields: &FieldSet) -> String {
    // A map of strings to strings always serializes.
    serde_json::to_string(fields).unwrap_or_else(|_| String::from("{}"))
}
