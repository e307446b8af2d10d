mod table;
pub use table::SamplesTable;

mod site_selector;
pub use site_selector::SiteSelector;

mod charts;
pub use charts::{ConcentrationChart, StatusChart};

mod map;
pub use map::SampleMap;

mod export;
pub use export::SamplesExportPanel;

use crate::core::{
    aggregate::{ConcentrationSeries, StatusCounts},
    dataset::{Dataset, Sample, SampleStore, Site},
    filter::{derive_visibility, FilterState, VisibilityMap},
    sort::{initial_order, sort_order, SortKey},
    urlstate,
};

/// All dashboard state: the immutable store plus the filter, the sort
/// order, and every derived artifact. The derived pieces are recomputed
/// synchronously inside the two setters and are never mutated from
/// anywhere else.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    store: SampleStore,
    order: Vec<usize>,
    filter: FilterState,
    sort_key: Option<SortKey>,
    visibility: VisibilityMap,
    status_counts: StatusCounts,
    concentrations: ConcentrationSeries,
}

impl DashboardState {
    pub fn new(store: SampleStore, filter: FilterState) -> Self {
        let order = initial_order(store.samples().len());
        let mut state = Self {
            store,
            order,
            filter,
            sort_key: None,
            visibility: VisibilityMap::default(),
            status_counts: StatusCounts::default(),
            concentrations: ConcentrationSeries::default(),
        };
        state.rederive();
        state
    }

    /// Parse a fetched dataset document and derive the initial views,
    /// usually with a filter restored from the URL.
    pub fn from_json(body: &str, filter: FilterState) -> Result<Self, String> {
        let dataset = Dataset::from_json(body)?;
        Ok(Self::new(SampleStore::new(dataset), filter))
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn status_counts(&self) -> &StatusCounts {
        &self.status_counts
    }

    pub fn concentrations(&self) -> &ConcentrationSeries {
        &self.concentrations
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn selected_site(&self) -> Option<&Site> {
        if self.filter.site_key.is_empty() {
            None
        } else {
            self.store.site(&self.filter.site_key)
        }
    }

    /// The current query string for the URL synchronizer.
    pub fn query_string(&self) -> String {
        urlstate::serialize_query(&self.filter)
    }

    /// Select a site (empty key clears the selection) and re-derive.
    pub fn set_site(&mut self, site_key: &str) {
        self.filter.set_site(site_key);
        self.rederive();
    }

    /// Update the free-text query (case-folded on entry) and re-derive.
    pub fn set_query(&mut self, raw: &str) {
        self.filter.set_query(raw);
        self.rederive();
    }

    /// Reorder the whole sequence, shown and hidden rows alike. The
    /// visibility map is keyed by identifier, so nothing else changes.
    pub fn sort_by(&mut self, key: SortKey) {
        sort_order(self.store.samples(), &mut self.order, key);
        self.sort_key = Some(key);
    }

    /// The full sample sequence in current sort order.
    pub fn ordered_samples(&self) -> impl Iterator<Item = &Sample> {
        self.order.iter().map(|&i| &self.store.samples()[i])
    }

    /// Visible samples in current sort order, for the table.
    pub fn visible_samples(&self) -> Vec<&Sample> {
        self.ordered_samples()
            .filter(|sample| self.visibility.is_visible(&sample.name))
            .collect()
    }

    /// Visible samples that carry coordinates, for the map markers.
    pub fn mapped_samples(&self) -> Vec<&Sample> {
        self.ordered_samples()
            .filter(|sample| {
                sample.has_coordinates() && self.visibility.is_visible(&sample.name)
            })
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visibility.visible_count()
    }

    pub fn total_count(&self) -> usize {
        self.store.samples().len()
    }

    fn rederive(&mut self) {
        self.visibility = derive_visibility(self.store.samples(), &self.filter);
        self.status_counts = StatusCounts::from_visible(self.store.samples(), &self.visibility);
        self.concentrations =
            ConcentrationSeries::from_visible(self.store.samples(), &self.visibility);
    }
}

/// Load lifecycle for the samples view. The dataset and geometry fetches
/// are independent and may land in either order; a failed dataset fetch
/// pins the view in `Loading`'s visual state with the error shown.
#[derive(Debug, Clone, Default)]
pub struct SamplesViewState {
    pub dashboard: Option<DashboardState>,
    pub error: Option<String>,
    /// GeoJSON overlay, held opaquely and passed through to the map.
    pub geometry: Option<serde_json::Value>,
}

impl SamplesViewState {
    pub fn is_loading(&self) -> bool {
        self.dashboard.is_none() && self.error.is_none()
    }
}
