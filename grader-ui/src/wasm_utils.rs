//! Browser event listeners tied to Rust ownership
//!
//! A JS listener needs its `Closure` to stay alive for as long as it is
//! attached. [`EventListenerGuard`] owns the closure and detaches the listener
//! in `Drop`, so storing the guard in a `Signal<Option<_>>` and setting it to
//! `None` is enough to remove it.

use wasm_bindgen_x::prelude::*;

/// Listener attached to a document or window, removed on drop
pub struct EventListenerGuard {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListenerGuard {
    pub fn new(
        target: impl Into<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let target = target.into();
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attach to the current document, if there is one.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self::new(document, event_name, callback))
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `key` of a keyboard event, or `None` for any other event.
pub fn keyboard_key(event: &JsValue) -> Option<String> {
    event
        .dyn_ref::<web_sys_x::KeyboardEvent>()
        .map(|e| e.key())
}
