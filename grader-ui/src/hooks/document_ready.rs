//! Page readiness as a signal

use crate::wasm_utils::EventListenerGuard;
use dioxus::prelude::*;

fn document_is_ready() -> bool {
    web_sys_x::window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() != web_sys_x::DocumentReadyState::Loading)
        .unwrap_or(false)
}

/// True once `document.readyState` has left `"loading"`.
///
/// Checked after mount (the JS bridge may not be up during component init),
/// then kept current through `readystatechange` until the page is ready.
pub fn use_document_ready() -> ReadSignal<bool> {
    let mut ready = use_signal(|| false);
    let mut listener: Signal<Option<EventListenerGuard>> = use_signal(|| None);

    use_effect(move || {
        if document_is_ready() {
            ready.set(true);
            return;
        }

        let guard = EventListenerGuard::on_document("readystatechange", move |_| {
            if document_is_ready() {
                ready.set(true);
            }
        });
        listener.set(guard);
    });

    // Listener is only needed until the first transition
    use_effect(move || {
        if ready() {
            listener.set(None);
        }
    });

    ready.into()
}
