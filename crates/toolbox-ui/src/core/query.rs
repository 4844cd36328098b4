//! Lenient query-string parsing and form-urlencoded serialization.

use std::fmt::{self, Display, Formatter};
use url::form_urlencoded;

/// Ordered, append-only list of query parameters. Duplicate keys are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append one pair, keeping any earlier pair with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no pair has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Display for QueryParams {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        formatter.write_str(&serializer.finish())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// Parse a raw `key=value&key2=value2` string.
///
/// Segments split on the first `=`; a segment without `=` becomes a key with an
/// empty value and a segment with an empty key is dropped. Nothing is
/// percent-decoded, and parsing never fails.
#[must_use]
pub fn parse_query_string(raw: &str) -> QueryParams {
    let mut params = QueryParams::new();
    if raw.is_empty() {
        return params;
    }
    for segment in raw.split('&') {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        if key.is_empty() {
            continue;
        }
        params.append(key, value);
    }
    params
}

/// Append serialized parameters to `url`, choosing `?` or `&` as the joiner.
///
/// An empty parameter set leaves the URL untouched.
pub fn append_query(url: &mut String, params: &QueryParams) {
    if params.is_empty() {
        return;
    }
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&params.to_string());
}
