//! RAII click-listener registration.
//!
//! A [`ClickListener`] owns both the closure and its registration on the
//! target; dropping it removes the listener, which is what lets the
//! top-level handle tear the whole page wiring down.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::WebError;

pub(crate) struct ClickListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl ClickListener {
    /// Attaches `handler` as a click listener on `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects the registration.
    pub(crate) fn attach<F>(target: &EventTarget, handler: F) -> Result<Self, WebError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| WebError::ListenerFailed {
                event: "click",
                details: format!("{e:?}"),
            })?;
        Ok(Self {
            target: target.clone(),
            closure,
        })
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        // Removal failure leaves a listener whose closure is about to be
        // freed; nothing useful can be done with the error here.
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}
