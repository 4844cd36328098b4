//! Render model for a completed call: summary chips, a recursive tree and raw JSON.
//!
//! # Design
//! - Pure data; the Yew components only map it to markup.
//! - The tree is a tagged variant, so object/array/scalar handling is exhaustive.
//! - Optional server metadata (`duration_ms`, `request_id`) omits its chip when absent.

use crate::core::transport::InboundResult;
use crate::i18n::Translations;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Body field carrying the server-reported duration.
pub const SERVER_DURATION_KEY: &str = "duration_ms";
/// Body field carrying the request correlation id.
pub const REQUEST_ID_KEY: &str = "request_id";

/// Kind of scalar shown by a leaf, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// JSON string.
    String,
    /// JSON number.
    Number,
    /// JSON boolean.
    Bool,
    /// JSON null.
    Null,
}

impl ScalarKind {
    /// CSS modifier for the kind.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

/// Node of the visual tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderNode {
    /// Leaf text with its scalar kind.
    Scalar {
        /// Display text.
        text: String,
        /// Scalar kind.
        kind: ScalarKind,
    },
    /// Object or array expanded into ordered labelled children.
    Composite(Vec<Branch>),
}

/// Labelled child of a composite node. Array indices are labelled `[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Object key or bracketed index.
    pub label: String,
    /// Child node.
    pub node: RenderNode,
}

impl RenderNode {
    /// Build the tree mirroring `value`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::Composite(
                map.iter()
                    .map(|(key, child)| Branch {
                        label: key.clone(),
                        node: Self::from_value(child),
                    })
                    .collect(),
            ),
            Value::Array(items) => Self::Composite(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, child)| Branch {
                        label: format!("[{index}]"),
                        node: Self::from_value(child),
                    })
                    .collect(),
            ),
            Value::String(text) => Self::scalar(text.clone(), ScalarKind::String),
            Value::Number(number) => Self::scalar(number.to_string(), ScalarKind::Number),
            Value::Bool(flag) => Self::scalar(flag.to_string(), ScalarKind::Bool),
            Value::Null => Self::scalar("null".to_string(), ScalarKind::Null),
        }
    }

    const fn scalar(text: String, kind: ScalarKind) -> Self {
        Self::Scalar { text, kind }
    }
}

/// Summary chip identity; the view maps it to a translated label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipKind {
    /// HTTP status code.
    Status,
    /// Client-measured duration.
    ClientDuration,
    /// Server-reported `duration_ms`.
    ServerDuration,
    /// Server-reported `request_id`.
    RequestId,
}

/// Visual tone of a chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipTone {
    /// Success (2xx status).
    Ok,
    /// Failure (any other status).
    Error,
    /// Informational.
    Neutral,
}

impl ChipTone {
    /// CSS modifier for the tone.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Neutral => "info",
        }
    }
}

/// Small labelled badge in the summary strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chip {
    /// Which metadata the chip shows.
    pub kind: ChipKind,
    /// Display value.
    pub value: String,
    /// Visual tone.
    pub tone: ChipTone,
}

/// Everything an output region shows for a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    /// Summary chips in display order.
    pub chips: Vec<Chip>,
    /// Tree for object/array bodies; `None` renders the "no structured data" placeholder.
    pub tree: Option<RenderNode>,
    /// Pretty-printed `{status, duration_ms_client, data}` document.
    pub raw: String,
}

impl ResultView {
    /// Build the view for `result`.
    #[must_use]
    pub fn from_result(result: &InboundResult) -> Self {
        Self {
            chips: summary_chips(result),
            tree: match &result.body {
                Value::Object(_) | Value::Array(_) => Some(RenderNode::from_value(&result.body)),
                _ => None,
            },
            raw: raw_document(result),
        }
    }

    /// Chip of the given kind, if shown.
    #[must_use]
    pub fn chip(&self, kind: ChipKind) -> Option<&Chip> {
        self.chips.iter().find(|chip| chip.kind == kind)
    }
}

/// What an output region currently displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionState {
    /// A call is in flight.
    Loading,
    /// The call failed at the transport; the message is shown as one line.
    Failed(String),
    /// The call completed.
    Ready(ResultView),
}

/// Translated labels used by the result panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLabels {
    /// Loading indicator text.
    pub loading: String,
    /// Status chip label.
    pub status: String,
    /// Client duration chip label.
    pub client_duration: String,
    /// Server duration chip label.
    pub server_duration: String,
    /// Request id chip label.
    pub request_id: String,
    /// Visual section heading.
    pub visual: String,
    /// Raw section heading.
    pub raw: String,
    /// Placeholder for bodies without structure.
    pub empty: String,
}

impl ResultLabels {
    /// Resolve every label for `lang`, with English defaults for missing keys.
    #[must_use]
    pub fn resolve(translations: &Translations, lang: &str) -> Self {
        let text = |path: &str, default: &str| translations.text(path, lang, default);
        Self {
            loading: text("result.loading", "Loading..."),
            status: text("result.status", "Status"),
            client_duration: text("result.client_duration", "Client (ms)"),
            server_duration: text("result.server_duration", "Server (ms)"),
            request_id: text("result.request_id", "Request ID"),
            visual: text("result.visual", "Structured view"),
            raw: text("result.raw", "Raw JSON"),
            empty: text("result.empty", "No structured data"),
        }
    }

    /// Label for a chip.
    #[must_use]
    pub fn chip(&self, kind: ChipKind) -> &str {
        match kind {
            ChipKind::Status => &self.status,
            ChipKind::ClientDuration => &self.client_duration,
            ChipKind::ServerDuration => &self.server_duration,
            ChipKind::RequestId => &self.request_id,
        }
    }
}

/// Whether `status` counts as success (inclusive 200–299).
#[must_use]
pub const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Format a millisecond value with one decimal.
#[must_use]
pub fn format_ms(ms: f64) -> String {
    format!("{ms:.1}")
}

fn summary_chips(result: &InboundResult) -> Vec<Chip> {
    let mut chips = vec![
        Chip {
            kind: ChipKind::Status,
            value: result.status.to_string(),
            tone: if is_success(result.status) {
                ChipTone::Ok
            } else {
                ChipTone::Error
            },
        },
        Chip {
            kind: ChipKind::ClientDuration,
            value: format_ms(result.client_duration_ms),
            tone: ChipTone::Neutral,
        },
    ];
    if let Some(Value::Number(duration)) = result.body.get(SERVER_DURATION_KEY) {
        chips.push(Chip {
            kind: ChipKind::ServerDuration,
            value: duration.to_string(),
            tone: ChipTone::Neutral,
        });
    }
    let request_id = match result.body.get(REQUEST_ID_KEY) {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };
    if let Some(id) = request_id {
        chips.push(Chip {
            kind: ChipKind::RequestId,
            value: id,
            tone: ChipTone::Neutral,
        });
    }
    chips
}

#[derive(Serialize)]
struct RawDocument<'a> {
    status: u16,
    #[serde(serialize_with = "serialize_ms")]
    duration_ms_client: f64,
    data: &'a Value,
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn serialize_ms<S: Serializer>(ms: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Integral durations print as `12`, not `12.0`.
    if ms.fract() == 0.0 && ms.abs() < 9.0e15 {
        serializer.serialize_i64(*ms as i64)
    } else {
        serializer.serialize_f64(*ms)
    }
}

fn raw_document(result: &InboundResult) -> String {
    let document = RawDocument {
        status: result.status,
        duration_ms_client: result.client_duration_ms,
        data: &result.body,
    };
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| result.body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(status: u16, body: Value) -> InboundResult {
        InboundResult {
            status,
            client_duration_ms: 4.2,
            body,
        }
    }

    fn leaf(text: &str, kind: ScalarKind) -> RenderNode {
        RenderNode::Scalar {
            text: text.into(),
            kind,
        }
    }

    #[test]
    fn uuid_response_renders_chips_and_tree() {
        let view = ResultView::from_result(&result(
            200,
            json!({"uuids": ["a", "b"], "duration_ms": 3, "request_id": "r1"}),
        ));
        let status = view.chip(ChipKind::Status);
        assert_eq!(status.map(|c| (c.value.as_str(), c.tone)), Some(("200", ChipTone::Ok)));
        assert_eq!(
            view.chip(ChipKind::ServerDuration).map(|c| c.value.as_str()),
            Some("3")
        );
        assert_eq!(view.chip(ChipKind::RequestId).map(|c| c.value.as_str()), Some("r1"));
        assert_eq!(
            view.chip(ChipKind::ClientDuration).map(|c| c.value.as_str()),
            Some("4.2")
        );

        let Some(RenderNode::Composite(branches)) = view.tree else {
            panic!("expected composite root");
        };
        assert_eq!(branches[0].label, "uuids");
        assert_eq!(
            branches[0].node,
            RenderNode::Composite(vec![
                Branch {
                    label: "[0]".into(),
                    node: leaf("a", ScalarKind::String),
                },
                Branch {
                    label: "[1]".into(),
                    node: leaf("b", ScalarKind::String),
                },
            ])
        );
    }

    #[test]
    fn status_tone_boundaries() {
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        let view = ResultView::from_result(&result(401, json!({"detail": "nope"})));
        assert_eq!(view.chip(ChipKind::Status).map(|c| c.tone), Some(ChipTone::Error));
    }

    #[test]
    fn missing_metadata_omits_chips() {
        let view = ResultView::from_result(&result(
            200,
            json!({"duration_ms": "slow", "other": 1}),
        ));
        assert_eq!(view.chips.len(), 2);
        assert!(view.chip(ChipKind::ServerDuration).is_none());
        assert!(view.chip(ChipKind::RequestId).is_none());
    }

    #[test]
    fn plain_text_body_renders_single_raw_leaf() -> Result<(), serde_json::Error> {
        let view = ResultView::from_result(&result(200, json!({"raw": "OK"})));
        assert_eq!(
            view.tree,
            Some(RenderNode::Composite(vec![Branch {
                label: "raw".into(),
                node: leaf("OK", ScalarKind::String),
            }]))
        );
        let raw: Value = serde_json::from_str(&view.raw)?;
        assert_eq!(raw["data"]["raw"], "OK");
        assert_eq!(raw["status"], 200);
        Ok(())
    }

    #[test]
    fn scalar_bodies_use_placeholder() {
        for body in [json!(null), json!(42), json!("text"), json!(true)] {
            assert_eq!(ResultView::from_result(&result(200, body)).tree, None);
        }
        let empty = ResultView::from_result(&result(200, json!({})));
        assert_eq!(empty.tree, Some(RenderNode::Composite(Vec::new())));
    }

    #[test]
    fn scalars_keep_their_kind() {
        let tree = RenderNode::from_value(&json!({"n": 1.5, "b": false, "z": null}));
        assert_eq!(
            tree,
            RenderNode::Composite(vec![
                Branch {
                    label: "n".into(),
                    node: leaf("1.5", ScalarKind::Number),
                },
                Branch {
                    label: "b".into(),
                    node: leaf("false", ScalarKind::Bool),
                },
                Branch {
                    label: "z".into(),
                    node: leaf("null", ScalarKind::Null),
                },
            ])
        );
    }

    #[test]
    fn labels_follow_language() {
        let translations = Translations::load();
        let en = ResultLabels::resolve(&translations, "en");
        let zh = ResultLabels::resolve(&translations, "zh");
        assert_eq!(en.chip(ChipKind::Status), "Status");
        assert_eq!(zh.chip(ChipKind::Status), "状态");
        assert_eq!(ResultLabels::resolve(&translations, "fr"), en);
    }

    #[test]
    fn raw_document_keeps_field_order_and_integral_durations() {
        let mut integral = result(200, json!({"b": 1, "a": 2}));
        integral.client_duration_ms = 12.0;
        let raw = ResultView::from_result(&integral).raw;
        assert_eq!(
            raw,
            "{\n  \"status\": 200,\n  \"duration_ms_client\": 12,\n  \"data\": {\n    \"b\": 1,\n    \"a\": 2\n  }\n}"
        );
        assert!(ResultView::from_result(&result(200, json!([]))).raw.contains("4.2"));
    }
}
