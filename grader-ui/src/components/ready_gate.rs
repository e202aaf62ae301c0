//! Readiness gate

use dioxus::prelude::*;

/// Renders `children` only once the host reports it is ready.
#[component]
pub fn ReadyGate(is_ready: bool, children: Element) -> Element {
    if !is_ready {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}
