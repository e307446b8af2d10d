use dioxus::prelude::*;

use crate::core::platform;
use crate::samples::SamplesViewState;

/// Site dropdown plus the free-text search box. Both write through the
/// dashboard setters, then mirror the new filter into the URL.
#[component]
pub fn SiteSelector(mut view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {};
    };

    let site_key = dashboard.filter().site_key.clone();
    let query = dashboard.filter().query_text.clone();
    let options: Vec<(String, String)> = dashboard
        .store()
        .sites_by_name()
        .into_iter()
        .map(|site| (site.plutof_id.clone(), site.name.clone()))
        .collect();

    let on_site = move |evt: dioxus::events::FormEvent| {
        let mut state = view.write();
        if let Some(d) = state.dashboard.as_mut() {
            d.set_site(&evt.value());
            platform::replace_url_query(&d.query_string());
        }
    };

    let on_query = move |evt: dioxus::events::FormEvent| {
        let mut state = view.write();
        if let Some(d) = state.dashboard.as_mut() {
            d.set_query(&evt.value());
            platform::replace_url_query(&d.query_string());
        }
    };

    rsx! {
        div { class: "site-selector",
            label { class: "mb-2", "Select World Heritage site" }
            select { class: "form-select", value: "{site_key}", oninput: on_site,
                option { value: "", "Select site" }
                for (key, name) in options.into_iter() {
                    option { key: "{key}", value: "{key}", "{name}" }
                }
            }
            div { class: "mt-3",
                label { class: "mb-2", "Search" }
                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Search",
                    value: "{query}",
                    oninput: on_query,
                }
            }
        }
    }
}
