use dioxus::prelude::*;

use crate::shared::types::EmotionLog;

pub const VIDEO_ELEMENT_ID: &str = "camera-feed";

#[allow(non_snake_case)]
#[component]
pub fn CameraPanel(
    connected: bool,
    #[props(!optional)] emotion: Option<EmotionLog>,
    on_toggle: EventHandler<()>,
) -> Element {
    let (dot, tone, state_label) = if connected {
        ("bg-green-400", "text-green-400", "Connected")
    } else {
        ("bg-red-400", "text-red-400", "Disconnected")
    };
    let toggle_label = if connected { "✕ Disconnect Device" } else { "▶ Connect Device" };

    rsx! {
        div { class: "bg-gray-800 rounded-lg border border-gray-700 overflow-hidden",
            div { class: "p-4 sm:p-6",
                div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6 space-y-3 sm:space-y-0",
                    h3 { class: "text-lg font-semibold text-white", "External Camera" }
                    div { class: "flex items-center space-x-2",
                        div { class: "w-2 h-2 rounded-full {dot}" }
                        span { class: "text-sm {tone}", "{state_label}" }
                    }
                }
                div { class: "bg-gray-900 rounded-lg aspect-video flex flex-col items-center justify-center mb-6 border border-gray-600 p-4 relative",
                    if connected {
                        video {
                            id: VIDEO_ELEMENT_ID,
                            class: "w-full h-full object-cover",
                            autoplay: true,
                            playsinline: true,
                            muted: true,
                        }
                    } else {
                        span { class: "text-5xl text-gray-500 mb-4", "📷" }
                        p { class: "text-gray-400 text-center mb-4 text-sm sm:text-base", "Camera feed is disconnected" }
                    }
                    button {
                        class: "absolute bottom-4 flex items-center space-x-2 px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-white transition-colors text-sm z-10",
                        onclick: move |_| on_toggle.call(()),
                        "{toggle_label}"
                    }
                }
                div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between text-sm space-y-3 sm:space-y-0",
                    span { class: "text-gray-400", "Device: External Monitor" }
                }
            }

            // Facial emotion analysis
            div { class: "p-4 sm:p-6 border-t border-gray-700",
                h4 { class: "text-base font-semibold text-white mb-4", "Facial Emotion Analysis" }
                match emotion {
                    Some(e) => rsx! {
                        div { class: "grid grid-cols-2 gap-4 text-sm",
                            div {
                                div { class: "text-gray-400 mb-1", "Detected Emotion" }
                                div { class: "text-blue-400 font-bold capitalize", "{e.emotion}" }
                            }
                            div {
                                div { class: "text-gray-400 mb-1", "Stress Level" }
                                div { class: "text-blue-400 font-bold capitalize", "{e.stress_level}" }
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "text-gray-500 text-sm", "Waiting for emotion data..." }
                    },
                }
            }
        }
    }
}
