use dioxus::prelude::*;

use crate::core::{dataset::Sample, format, platform};
use crate::samples::SamplesViewState;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Download the currently visible sample set as CSV or JSON.
#[component]
pub fn SamplesExportPanel(view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {};
    };
    let visible = dashboard.visible_count();

    let mut status = use_signal(|| ExportStatus::Idle);

    let csv_handler = move |_| {
        let state = view();
        let Some(dashboard) = state.dashboard.as_ref() else {
            return;
        };
        let body = visible_samples_csv(&dashboard.visible_samples());
        match platform::download_text("samples.csv", "text/csv", &body) {
            Ok(()) => status.set(ExportStatus::Done(format!("Exported {visible} samples as CSV"))),
            Err(err) => status.set(ExportStatus::Error(err)),
        }
    };

    let json_handler = move |_| {
        let state = view();
        let Some(dashboard) = state.dashboard.as_ref() else {
            return;
        };
        match visible_samples_json(&dashboard.visible_samples()) {
            Ok(body) => match platform::download_text("samples.json", "application/json", &body) {
                Ok(()) => {
                    status.set(ExportStatus::Done(format!("Exported {visible} samples as JSON")))
                }
                Err(err) => status.set(ExportStatus::Error(err)),
            },
            Err(err) => status.set(ExportStatus::Error(err)),
        }
    };

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some(("samples-export__meta".to_string(), message.clone())),
        ExportStatus::Error(err) => Some((
            "samples-export__meta samples-export__meta--error".to_string(),
            err.clone(),
        )),
    };

    rsx! {
        div { class: "samples-export",
            button { r#type: "button", class: "btn btn-sm", onclick: csv_handler, "Download CSV" }
            button { r#type: "button", class: "btn btn-sm", onclick: json_handler, "Download JSON" }
            if let Some((class, message)) = feedback {
                span { class: "{class}", "{message}" }
            }
        }
    }
}

/// CSV rendition of the visible set, one row per sample with the
/// extraction concentrations joined by `;`.
pub fn visible_samples_csv(samples: &[&Sample]) -> String {
    let mut out = String::from(
        "identifier,status,site,locality,collected,size_ml,blank,concentrations_ng_ul\n",
    );
    for sample in samples {
        let concentrations = sample
            .dnas
            .iter()
            .map(|dna| format::format_concentration(dna.concentration))
            .collect::<Vec<_>>()
            .join(";");
        let row = [
            csv_field(&sample.name),
            csv_field(sample.status.label()),
            csv_field(&sample.parent_area_name),
            csv_field(&sample.area_name),
            csv_field(&format::format_event_date(&sample.event_begin)),
            csv_field(&format::format_volume(sample.size)),
            csv_field(if sample.blank { "yes" } else { "" }),
            csv_field(&concentrations),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// JSON rendition of the visible set, the samples exactly as modeled.
pub fn visible_samples_json(samples: &[&Sample]) -> Result<String, String> {
    serde_json::to_string_pretty(samples).map_err(|err| format!("couldn't encode JSON: {err}"))
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
