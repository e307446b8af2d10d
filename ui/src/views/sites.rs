use dioxus::prelude::*;

use crate::core::dataset::{Dataset, SampleStore};
use crate::core::platform;
use super::samples::DATASET_URL;

#[derive(Debug, Clone, Default)]
struct SitesState {
    store: Option<SampleStore>,
    error: Option<String>,
}

/// Directory of all World Heritage sites in the dataset with their
/// registered-sample tallies and reference links.
#[component]
pub fn Sites() -> Element {
    let mut state = use_signal(SitesState::default);

    use_future(move || async move {
        match platform::fetch_text(DATASET_URL).await {
            Ok(body) => match Dataset::from_json(&body) {
                Ok(dataset) => state.write().store = Some(SampleStore::new(dataset)),
                Err(err) => state.write().error = Some(err),
            },
            Err(err) => state.write().error = Some(err),
        }
    });

    let current = state();

    let rows: Vec<SiteRow> = current
        .store
        .as_ref()
        .map(|store| {
            store
                .sites_by_name()
                .into_iter()
                .map(|site| SiteRow {
                    name: site.name.clone(),
                    url: site.url.clone(),
                    article: site.article.clone(),
                    sample_count: store
                        .samples()
                        .iter()
                        .filter(|sample| sample.parent_area_plutof_id == site.plutof_id)
                        .count(),
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "page page-sites",
            h1 { "World Heritage marine sites" }

            if current.store.is_some() {
                table { class: "table-sm",
                    thead {
                        tr {
                            th { "Site" }
                            th { "Samples" }
                            th { "Links" }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            tr { key: "{row.name}",
                                td { "{row.name}" }
                                td { "{row.sample_count}" }
                                td {
                                    a { href: "{row.url}", rel: "noreferrer", target: "_blank", "UNESCO" }
                                    if let Some(article) = row.article.as_ref() {
                                        span { class: "ms-3",
                                            a { href: "{article}", rel: "noreferrer", target: "_blank", "article" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { class: "page-sites__loading", "Loading sites…" }
                if let Some(error) = current.error.as_ref() {
                    p { class: "page-sites__error", "{error}" }
                }
            }
        }
    }
}

#[derive(Clone)]
struct SiteRow {
    name: String,
    url: String,
    article: Option<String>,
    sample_count: usize,
}
