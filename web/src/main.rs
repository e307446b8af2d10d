use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Samples, Sites};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Samples {},
    #[route("/sites")]
    Sites {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_samples(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Samples {},
        "{label}"
    })
}
fn nav_sites(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Sites {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        samples: nav_samples,
        sites: nav_sites,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout: the shared navbar, the routed page, and the
/// project footer.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        footer { class: "footer",
            p { class: "text-muted",
                "Environmental DNA Expeditions is a global, citizen science initiative that "
                "will help measure marine biodiversity, and the impacts climate change might "
                "have on the distribution patterns of marine life, across UNESCO World "
                "Heritage marine sites."
            }
        }
    }
}
