//! Overlay modal
//!
//! Fixed full-screen backdrop with a centered panel. Closes on backdrop click,
//! on the header × button, and on Escape. Children are only mounted while the
//! modal is open.

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::wasm_utils::{keyboard_key, EventListenerGuard};
use dioxus::prelude::*;

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    title: String,
    /// Called when the user dismisses the modal
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let mut escape_pressed = use_signal(|| false);
    let mut escape_listener: Signal<Option<EventListenerGuard>> = use_signal(|| None);

    // Listen for Escape only while open. The JS callback just flips a signal;
    // the handler runs from the effect below, inside the Dioxus runtime.
    use_effect(move || {
        if !is_open() {
            escape_listener.set(None);
            return;
        }
        let guard = EventListenerGuard::on_document("keydown", move |event| {
            if keyboard_key(&event).as_deref() == Some("Escape") {
                escape_pressed.set(true);
            }
        });
        escape_listener.set(guard);
    });

    use_effect(move || {
        if escape_pressed() {
            escape_pressed.set(false);
            on_close.call(());
        }
    });

    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/70 flex items-center justify-center z-[3000]",
            role: "dialog",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-gray-800 rounded-lg shadow-xl max-w-lg w-full mx-4 max-h-[80vh] flex flex-col",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex items-center justify-between px-6 pt-6 pb-4 border-b border-gray-700",
                    h2 { class: "text-xl font-bold text-white", "{title}" }
                    ChromelessButton {
                        class: Some("text-gray-400 hover:text-white transition-colors".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                div { class: "p-6 space-y-4 overflow-y-auto flex-1", {children} }
            }
        }
    }
}
