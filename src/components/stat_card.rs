use dioxus::prelude::*;

use crate::shared::status::{classify, MetricKind};
use crate::utils::format::format_metric;

#[allow(non_snake_case)]
#[component]
pub fn StatCard(kind: MetricKind, value: f64) -> Element {
    let status = classify(value, kind);
    let tone = status.tone.text_class();
    let shown = format_metric(value, kind);

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 sm:p-6 border border-gray-700",
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-gray-400 text-xs sm:text-sm font-medium", "{kind.title()}" }
                span { class: "text-blue-400 text-base leading-none", "{kind.icon()}" }
            }
            div { class: "space-y-2",
                div { class: "flex items-baseline space-x-2",
                    span { class: "text-2xl sm:text-3xl font-bold tabular-nums {tone}", "{shown}" }
                    span { class: "text-gray-400 text-xs sm:text-sm", "{kind.unit()}" }
                }
                div { class: "flex items-center space-x-1",
                    span { class: "text-xs text-gray-500", "→" }
                    span { class: "text-xs text-gray-400", "{status.label}" }
                }
            }
        }
    }
}
