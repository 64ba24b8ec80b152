use dioxus::prelude::*;

use crate::shared::chat::{ChatEntry, Role};

#[allow(non_snake_case)]
#[component]
pub fn ChatPanel(entries: Vec<ChatEntry>, on_send: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    // Empty drafts are dropped by the transcript itself
    let mut submit = move || {
        let text = draft.peek().clone();
        draft.set(String::new());
        on_send.call(text);
    };

    rsx! {
        div { class: "bg-gray-800 rounded-lg border border-gray-700 flex flex-col h-96 xl:h-auto",
            div { class: "p-4 border-b border-gray-700 flex-shrink-0",
                div { class: "flex items-center space-x-3",
                    div { class: "w-8 h-8 sm:w-10 sm:h-10 bg-blue-600 rounded-lg flex items-center justify-center flex-shrink-0 text-white", "🤖" }
                    h3 { class: "text-base sm:text-lg font-semibold text-white", "Health AI Assistant" }
                }
            }
            div { class: "flex-1 p-4 overflow-y-auto min-h-0",
                div { class: "space-y-4",
                    for (i, entry) in entries.iter().enumerate() {
                        {
                            let user = entry.role == Role::User;
                            let row = if user { "flex justify-end" } else { "flex justify-start" };
                            let bubble = if user { "bg-blue-600 text-white" } else { "bg-gray-700 text-gray-200" };
                            let pulse = if entry.is_pending() { "animate-pulse" } else { "" };
                            rsx! {
                                div { key: "{i}", class: "{row}",
                                    div { class: "max-w-[85%] sm:max-w-xs lg:max-w-sm",
                                        div { class: "p-3 rounded-lg {bubble} {pulse}",
                                            p { class: "text-xs sm:text-sm leading-relaxed whitespace-pre-wrap", "{entry.text}" }
                                        }
                                        p { class: "text-xs text-gray-500 mt-1 text-right", "{entry.timestamp}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "p-4 border-t border-gray-700 flex-shrink-0",
                div { class: "flex space-x-2",
                    input {
                        r#type: "text",
                        value: "{draft}",
                        placeholder: "Ask about your health data...",
                        class: "flex-1 px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-blue-500 text-sm",
                        oninput: move |e| draft.set(e.value()),
                        onkeypress: move |e| {
                            if e.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                    button {
                        class: "px-3 sm:px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-white transition-colors flex-shrink-0",
                        onclick: move |_| submit(),
                        "Send"
                    }
                }
            }
        }
    }
}
