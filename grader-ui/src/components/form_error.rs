//! Inline submit error

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

#[component]
pub fn FormErrorNotice(heading: String, detail: String) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-3 p-4 bg-red-900/30 border border-red-700/50 rounded-lg",
            role: "alert",
            AlertTriangleIcon { class: "w-5 h-5 text-red-400 shrink-0 mt-0.5" }
            div {
                div { class: "text-sm font-medium text-red-300", "{heading}" }
                div { class: "text-xs text-red-400 mt-1 select-text break-words", "{detail}" }
            }
        }
    }
}
