use dioxus::prelude::*;

use crate::core::{format, platform, urlstate};
use crate::samples::{
    ConcentrationChart, DashboardState, SampleMap, SamplesExportPanel, SamplesTable,
    SamplesViewState, SiteSelector, StatusChart,
};

/// Published dataset, regenerated nightly.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/iobis/edna-tracker-data/data/generated.json";
/// Site polygon overlay served alongside the page.
pub const GEOJSON_URL: &str = "sites.geojson";

#[cfg(debug_assertions)]
fn log_fetch_outcome(label: &str, outcome: &Result<(), String>) {
    match outcome {
        Ok(()) => println!("[fetch] {label} loaded"),
        Err(err) => println!("[fetch] {label} failed: {err}"),
    }
}

#[component]
pub fn Samples() -> Element {
    let mut view = use_signal(SamplesViewState::default);

    // Dataset fetch. The filter is restored from the URL before the data
    // arrives so a deep link derives the right view on first paint.
    use_future(move || async move {
        let filter = urlstate::parse_query(&platform::location_query());
        let outcome = match platform::fetch_text(DATASET_URL).await {
            Ok(body) => match DashboardState::from_json(&body, filter) {
                Ok(dashboard) => {
                    view.write().dashboard = Some(dashboard);
                    Ok(())
                }
                Err(err) => Err(err),
            },
            Err(err) => Err(err),
        };
        #[cfg(debug_assertions)]
        log_fetch_outcome("dataset", &outcome);
        if let Err(err) = outcome {
            view.write().error = Some(err);
        }
    });

    // Geometry fetch; independent of the dataset and may land first or
    // last. The overlay is optional, so failure here is silent.
    use_future(move || async move {
        let outcome = match platform::fetch_text(GEOJSON_URL).await {
            Ok(body) => match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(geometry) => {
                    view.write().geometry = Some(geometry);
                    Ok(())
                }
                Err(err) => Err(format!("couldn't parse overlay: {err}")),
            },
            Err(err) => Err(err),
        };
        #[cfg(debug_assertions)]
        log_fetch_outcome("geometry", &outcome);
    });

    let state = view();

    let site_header = state.dashboard.as_ref().and_then(|dashboard| {
        dashboard.selected_site().map(|site| {
            (site.name.clone(), site.url.clone(), site.article.clone())
        })
    });

    let created = state
        .dashboard
        .as_ref()
        .map(|dashboard| format::format_created(dashboard.store().created()));

    rsx! {
        div { class: "page page-samples",
            SampleMap { view }

            if state.dashboard.is_some() {
                div { class: "page-samples__controls",
                    SiteSelector { view }
                    ConcentrationChart { view }
                    StatusChart { view }
                }

                if let Some((name, url, article)) = site_header {
                    div { class: "page-samples__site",
                        h2 { "{name}" }
                        p {
                            a { href: "{url}", rel: "noreferrer", target: "_blank", "{url}" }
                            if let Some(article) = article {
                                span { class: "ms-3",
                                    a { href: "{article}", rel: "noreferrer", target: "_blank", "read article" }
                                }
                            }
                        }
                    }
                }

                SamplesTable { view }
                SamplesExportPanel { view }

                if let Some(created) = created {
                    p { class: "page-samples__created text-muted", "Data last updated {created}." }
                }
            } else {
                // Stays up for good when the fetch fails; the engine does
                // not retry.
                p { class: "page-samples__loading", "Loading samples…" }
                if let Some(error) = state.error.as_ref() {
                    p { class: "page-samples__error", "{error}" }
                }
            }
        }
    }
}
