use dioxus::prelude::*;

use crate::samples::SamplesViewState;

/// Marker data for the map layer: visible samples with coordinates, plus
/// the GeoJSON overlay passed through untouched. Tile rendering itself
/// happens in the embedding page's map library; this component only
/// materializes the data it binds to.
#[component]
pub fn SampleMap(view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {
            div { id: "map", class: "sample-map sample-map--loading" }
        };
    };

    let markers: Vec<Marker> = dashboard
        .mapped_samples()
        .into_iter()
        .map(|sample| Marker {
            name: sample.name.clone(),
            locality: sample.area_name.clone(),
            latitude: sample.area_latitude.unwrap_or_default(),
            longitude: sample.area_longitude.unwrap_or_default(),
        })
        .collect();

    let overlay_features = state
        .geometry
        .as_ref()
        .and_then(|geo| geo.get("features"))
        .and_then(|features| features.as_array())
        .map(|features| features.len())
        .unwrap_or(0);

    rsx! {
        div { id: "map", class: "sample-map",
            span { class: "sample-map__meta",
                "{markers.len()} mapped samples · {overlay_features} site polygons"
            }
            ul { class: "sample-map__markers",
                for marker in markers.into_iter() {
                    li {
                        key: "{marker.name}",
                        class: "sample-map__marker",
                        "data-lat": "{marker.latitude}",
                        "data-lng": "{marker.longitude}",
                        "{marker.name} - {marker.locality}"
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct Marker {
    name: String,
    locality: String,
    latitude: f64,
    longitude: f64,
}
