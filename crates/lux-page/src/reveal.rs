//! Reveal-on-scroll.

use lux_page_core::{RevealState, selectors};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::controller::PageController;
use crate::dom;
use crate::page::Page;

/// Owns the observer and its callback; disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let state = reveal_state(&target).observe(entry.is_intersecting());
                    if state.is_revealed() {
                        let _ = target.class_list().add_1(selectors::REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveal state as recorded in the DOM.
pub fn reveal_state(element: &Element) -> RevealState {
    if element.class_list().contains(selectors::REVEALED_CLASS) {
        RevealState::Revealed
    } else {
        RevealState::Hidden
    }
}

pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let elements = dom::query_all(&page.document, selectors::REVEAL)?;
    if elements.is_empty() {
        page.trace("reveal: no .reveal elements");
        return Ok(());
    }
    let observer = RevealObserver::new(page.settings.reveal_threshold)?;
    for element in &elements {
        observer.observe(element);
    }
    controller.set_reveal(observer);
    Ok(())
}
