//! Bidirectional mapping between [`FilterState`] and the page query
//! string.
//!
//! The `search` and `site` parameters are the complete persisted-state
//! surface: nothing else survives a reload. `serialize` always emits both
//! parameters so links stay uniform, and callers replace the current
//! history entry rather than pushing, so filter edits don't pollute
//! back/forward navigation.

use std::borrow::Cow;

use super::filter::FilterState;

/// Read a query string (with or without the leading `?`) into a filter.
/// Missing parameters default to empty; unknown parameters and site keys
/// are ignored rather than rejected.
pub fn parse_query(raw: &str) -> FilterState {
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    let mut search = String::new();
    let mut site = String::new();

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "search" => search = decode(value),
            "site" => site = decode(value),
            _ => {}
        }
    }

    FilterState::new(site, &search)
}

/// Serialize a filter back into a query string. Both parameters are
/// always present, percent-encoded, so `parse(serialize(f)) == f`.
pub fn serialize_query(filter: &FilterState) -> String {
    format!(
        "?search={}&site={}",
        urlencoding::encode(&filter.query_text),
        urlencoding::encode(&filter.site_key)
    )
}

fn decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(Cow::Borrowed(text)) => text.to_string(),
        Ok(Cow::Owned(text)) => text,
        // Malformed escapes degrade to the raw text rather than erroring.
        Err(_) => value.to_string(),
    }
}
