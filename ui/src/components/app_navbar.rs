use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know the platform's `Route` enum.
/// If no builder is registered, any raw `children` passed are rendered
/// instead.
pub struct NavBuilder {
    pub samples: fn(label: &str) -> Element,
    pub sites: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let samples = (builder.samples)("Samples");
        let sites = (builder.sites)("Sites");

        rsx! {
            nav { class: "navbar__links",
                {samples}
                {sites}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "eDNA Expeditions" }
                    }
                    span { class: "navbar__brand-subtitle", "sample tracking" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
