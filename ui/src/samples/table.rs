use dioxus::prelude::*;

use crate::core::{dataset::Sample, format, sort::SortKey};
use crate::samples::SamplesViewState;

#[component]
pub fn SamplesTable(mut view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {};
    };

    let rows: Vec<TableRow> = dashboard
        .visible_samples()
        .into_iter()
        .map(TableRow::from_sample)
        .collect();

    rsx! {
        div { class: "samples-table",
            if rows.is_empty() {
                p { class: "samples-table__placeholder", "No samples found." }
            } else {
                table { class: "table-sm text-sm",
                    thead {
                        tr { class: "nowrap",
                            th {
                                onclick: move |_| {
                                    if let Some(d) = view.write().dashboard.as_mut() {
                                        d.sort_by(SortKey::Identifier);
                                    }
                                },
                                span { role: "button", "Identifier ↓" }
                            }
                            th { "Status" }
                            th {
                                onclick: move |_| {
                                    if let Some(d) = view.write().dashboard.as_mut() {
                                        d.sort_by(SortKey::Site);
                                    }
                                },
                                span { role: "button", "Site ↓" }
                            }
                            th {
                                onclick: move |_| {
                                    if let Some(d) = view.write().dashboard.as_mut() {
                                        d.sort_by(SortKey::Locality);
                                    }
                                },
                                span { role: "button", "Locality ↓" }
                            }
                            th {
                                onclick: move |_| {
                                    if let Some(d) = view.write().dashboard.as_mut() {
                                        d.sort_by(SortKey::CollectedDate);
                                    }
                                },
                                span { role: "button", "Collected ↓" }
                            }
                            th { "Size (ml)" }
                            th { "Blank" }
                            th { "DNA (ng/μl)" }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            {render_row(row)}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct TableRow {
    name: String,
    status_label: &'static str,
    badge_class: &'static str,
    site: String,
    locality: String,
    collected: String,
    volume: String,
    blank: &'static str,
    concentrations: Vec<String>,
}

impl TableRow {
    fn from_sample(sample: &Sample) -> Self {
        Self {
            name: sample.name.clone(),
            status_label: sample.status.label(),
            badge_class: sample.status.badge_class(),
            site: sample.parent_area_name.clone(),
            locality: sample.area_name.clone(),
            collected: format::format_event_date(&sample.event_begin),
            volume: format::format_volume(sample.size),
            blank: if sample.blank { "yes" } else { "" },
            concentrations: sample
                .dnas
                .iter()
                .map(|dna| format::format_concentration(dna.concentration))
                .collect(),
        }
    }
}

fn render_row(row: TableRow) -> Element {
    rsx! {
        tr { key: "{row.name}",
            td { "{row.name}" }
            td { span { class: "{row.badge_class} badge", "{row.status_label}" } }
            td { "{row.site}" }
            td { "{row.locality}" }
            td { class: "nowrap", "{row.collected}" }
            td { "{row.volume}" }
            td { "{row.blank}" }
            td {
                for (i, concentration) in row.concentrations.iter().enumerate() {
                    span { key: "{i}", class: "samples-table__dna", "{concentration}" }
                }
            }
        }
    }
}
