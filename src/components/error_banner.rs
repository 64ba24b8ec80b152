use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ErrorBanner(message: String, on_retry: EventHandler<()>, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 rounded-lg p-4 mb-6 flex items-start justify-between gap-4",
            div {
                p { class: "text-red-200 text-sm", "Error fetching data: {message}" }
                button {
                    class: "mt-2 px-4 py-2 bg-red-700 hover:bg-red-600 rounded text-sm transition-colors",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
            button {
                class: "text-red-300 hover:text-red-100 text-lg leading-none",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
