//! Success toast

use crate::components::icons::{CheckIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Dismissible confirmation shown after a form was submitted
#[component]
pub fn SuccessToast(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed bottom-4 right-4 bg-green-600 text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            role: "status",
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex items-center gap-2 flex-1",
                    CheckIcon { class: "w-4 h-4" }
                    span { "{message}" }
                }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
