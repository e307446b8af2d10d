//! End-to-end exercise of the derivation pipeline: URL restore, filter
//! mutation, sort, aggregation, and URL write-back against one dataset.

use ui::core::dataset::SampleStatus;
use ui::core::filter::FilterState;
use ui::core::sort::SortKey;
use ui::core::urlstate::{parse_query, serialize_query};
use ui::samples::DashboardState;

const DATASET: &str = r#"{
    "created": "2023-06-01",
    "sites": [
        {"plutof_id": 104197, "name": "Wadden Sea", "url": "https://whc.unesco.org/en/list/1314",
         "article": "https://example.org/wadden", "simplified_name": "wadden_sea"},
        {"plutof_id": 104198, "name": "Aldabra Atoll", "url": "https://whc.unesco.org/en/list/185"},
        {"plutof_id": 104199, "name": "Belize Barrier Reef", "url": "https://whc.unesco.org/en/list/764"}
    ],
    "samples": [
        {"name": "EE0201", "parent_area_plutof_id": 104197, "parent_area_name": "Wadden Sea",
         "area_name": "Pilsum", "area_latitude": 53.49, "area_longitude": 7.04,
         "event_begin": "2022-09-18", "size": 500, "blank": false, "status": "sequenced",
         "dnas": [{"plutof_id": 1, "concentration": 2.41}, {"plutof_id": 2, "concentration": 1.02}]},
        {"name": "EE0202", "parent_area_plutof_id": 104197, "parent_area_name": "Wadden Sea",
         "area_name": "Norddeich", "event_begin": "2022-09-20", "size": 500, "blank": true,
         "status": "extracted", "dnas": [{"plutof_id": 3, "concentration": 0.05}]},
        {"name": "EE0203", "parent_area_plutof_id": 104198, "parent_area_name": "Aldabra Atoll",
         "area_name": "West Channels", "area_latitude": -9.43, "area_longitude": 46.34,
         "event_begin": "2022-10-02", "size": 1000, "blank": false, "status": "collected"},
        {"name": "ReefSite-01", "parent_area_plutof_id": 104199, "parent_area_name": "Belize Barrier Reef",
         "area_name": "", "event_begin": "", "blank": false, "status": "registered"}
    ]
}"#;

#[test]
fn deep_link_restores_and_round_trips() {
    let filter = parse_query("?search=&site=104197");
    let state = DashboardState::from_json(DATASET, filter).unwrap();

    assert_eq!(state.visible_count(), 2);
    assert_eq!(state.selected_site().unwrap().name, "Wadden Sea");
    assert_eq!(state.query_string(), "?search=&site=104197");
    assert_eq!(&parse_query(&state.query_string()), state.filter());
}

#[test]
fn full_interaction_sequence() {
    // Load with no filter, as a bare visit would.
    let mut state = DashboardState::from_json(DATASET, FilterState::default()).unwrap();
    assert_eq!(state.visible_count(), 4);
    assert_eq!(state.status_counts().total(), 4);

    // Type a query.
    state.set_query("Reef");
    assert_eq!(state.visible_count(), 1);
    assert_eq!(state.visible_samples()[0].name, "ReefSite-01");
    assert_eq!(state.query_string(), "?search=reef&site=");

    // Pick a site that doesn't match the query: AND semantics.
    state.set_site("104197");
    assert_eq!(state.visible_count(), 0);
    assert_eq!(state.status_counts().total(), 0);

    // Clear the query; the site filter alone applies again.
    state.set_query("");
    assert_eq!(state.visible_count(), 2);

    // Aggregates follow the visible set.
    assert_eq!(state.status_counts().get(SampleStatus::Sequenced), 1);
    assert_eq!(state.status_counts().get(SampleStatus::Extracted), 1);
    assert_eq!(state.status_counts().get(SampleStatus::Registered), 0);

    let series = state.concentrations();
    assert_eq!(series.samples.len(), 3);
    assert_eq!(series.blanks, vec![(1, 0.05)]);

    // Visible + hidden always covers the whole store.
    assert_eq!(
        state.visibility().visible_count() + state.visibility().hidden_count(),
        state.total_count()
    );
}

#[test]
fn sort_spans_hidden_rows_and_survives_refiltering() {
    let mut state =
        DashboardState::from_json(DATASET, FilterState::new("104197", "")).unwrap();

    state.sort_by(SortKey::CollectedDate);
    let order: Vec<&str> = state.ordered_samples().map(|s| s.name.as_str()).collect();
    // The dateless sample sorts first; hidden rows participate.
    assert_eq!(order, ["ReefSite-01", "EE0201", "EE0202", "EE0203"]);

    state.set_site("");
    let order: Vec<&str> = state.ordered_samples().map(|s| s.name.as_str()).collect();
    assert_eq!(order, ["ReefSite-01", "EE0201", "EE0202", "EE0203"]);
    assert_eq!(state.visible_count(), 4);
}

#[test]
fn rederivation_is_stable_under_repeated_events() {
    let mut state = DashboardState::from_json(DATASET, FilterState::default()).unwrap();

    state.set_query("wadden");
    let first = state.visibility().clone();
    let first_counts = *state.status_counts();

    // Same keystroke content again, as a UI would emit.
    state.set_query("wadden");
    assert_eq!(state.visibility(), &first);
    assert_eq!(*state.status_counts(), first_counts);
}
