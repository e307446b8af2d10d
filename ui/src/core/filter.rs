//! Filter state and the visibility predicate.
//!
//! Visibility is a pure derivation: the raw dataset is never touched.
//! Each pass produces a [`VisibilityMap`] keyed by sample identifier, so
//! re-running with unchanged inputs always yields the same map.

use std::collections::HashMap;

use super::dataset::Sample;

/// The (site, free-text query) pair that determines which samples are
/// visible. This is the single source of truth for "what is shown" and
/// the complete state persisted in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Site key; empty means "all sites".
    pub site_key: String,
    /// Free-text query, case-folded on entry.
    pub query_text: String,
}

impl FilterState {
    pub fn new(site_key: impl Into<String>, query_text: &str) -> Self {
        Self {
            site_key: site_key.into(),
            query_text: query_text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.site_key.is_empty() && self.query_text.is_empty()
    }

    pub fn set_site(&mut self, site_key: &str) {
        self.site_key = site_key.to_string();
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query_text = raw.to_lowercase();
    }
}

/// Whether a single sample passes the filter.
///
/// Site match is exact string equality against the normalized site key
/// (or the empty-key wildcard). Query match is a case-insensitive
/// substring test over the identifier, the locality name, and the site
/// name. An unknown site key simply matches nothing.
pub fn sample_matches(sample: &Sample, filter: &FilterState) -> bool {
    let site_ok =
        filter.site_key.is_empty() || sample.parent_area_plutof_id == filter.site_key;

    let query = filter.query_text.as_str();
    let query_ok = query.is_empty()
        || sample.name.to_lowercase().contains(query)
        || sample.area_name.to_lowercase().contains(query)
        || sample.parent_area_name.to_lowercase().contains(query);

    site_ok && query_ok
}

/// Parallel visibility map produced by a derivation pass. Total: every
/// sample in the input gets an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    flags: HashMap<String, bool>,
    visible: usize,
}

impl VisibilityMap {
    /// Samples without an entry are treated as hidden; that only happens
    /// for identifiers that were never part of the derivation input.
    pub fn is_visible(&self, sample_name: &str) -> bool {
        self.flags.get(sample_name).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn hidden_count(&self) -> usize {
        self.flags.len() - self.visible
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Stamp visibility for every sample under the given filter.
pub fn derive_visibility(samples: &[Sample], filter: &FilterState) -> VisibilityMap {
    let mut flags = HashMap::with_capacity(samples.len());
    let mut visible = 0;

    for sample in samples {
        let shown = sample_matches(sample, filter);
        if shown {
            visible += 1;
        }
        flags.insert(sample.name.clone(), shown);
    }

    VisibilityMap { flags, visible }
}
