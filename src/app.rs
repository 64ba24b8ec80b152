use dioxus::prelude::*;

use crate::pages::Dashboard;
use crate::sources::SourceKind;
use crate::TAILWIND_CSS;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Simulated {},
        #[route("/live")]
        Live {},
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "VitalEyes" }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#111827" } // gray-900
        document::Meta { name: "color-scheme", content: "dark" }
        Router::<Route> {}
    }
}

#[allow(non_snake_case)]
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let tab = |active: bool| {
        if active {
            "px-3 py-1 rounded bg-blue-600 text-white"
        } else {
            "px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-gray-300"
        }
    };
    let sim_class = tab(route == Route::Simulated {});
    let live_class = tab(route == Route::Live {});

    rsx! {
        // Page container
        div { class: "min-h-screen bg-gray-900 text-white font-sans",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6",
                div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8",
                    div { class: "flex items-center space-x-4",
                        div { class: "w-12 h-12 rounded-lg bg-blue-600 grid place-items-center text-2xl", "♥" }
                        div {
                            h1 { class: "text-2xl sm:text-3xl font-bold", "VitalEyes" }
                            p { class: "text-gray-400 text-sm sm:text-base", "Real-time health monitoring dashboard" }
                        }
                    }
                    nav { class: "flex space-x-2 text-sm",
                        Link { class: "{sim_class}", to: Route::Simulated {}, "Simulated" }
                        Link { class: "{live_class}", to: Route::Live {}, "Live" }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Simulated() -> Element {
    rsx! { Dashboard { source: SourceKind::Synthetic } }
}

#[allow(non_snake_case)]
#[component]
fn Live() -> Element {
    rsx! { Dashboard { source: SourceKind::Remote } }
}
