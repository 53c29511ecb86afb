//! Event-listener ownership.
//!
//! Each handle owns the `Closure` passed to `addEventListener`; dropping the
//! handle removes the listener, so listeners live exactly as long as the
//! `PageController` that holds them.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub struct EventListenerHandle {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerHandle {
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Listener that promises never to call `preventDefault`, so the browser
    /// doesn't hold back scrolling while it runs.
    pub fn passive(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
