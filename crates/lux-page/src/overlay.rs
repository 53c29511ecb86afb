//! Overlay navigation menu.
//!
//! One `OverlayController` per page holds the current `OverlayState`; every
//! trigger goes through `handle`, which applies the whole presentation
//! (class, ARIA pair, body scroll lock) in one call.

use std::cell::Cell;
use std::rc::Rc;

use lux_page_core::{OverlayEvent, OverlayState, selectors};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent};

use crate::controller::PageController;
use crate::dom;
use crate::listener::EventListenerHandle;
use crate::page::Page;

pub struct OverlayController {
    overlay: Element,
    button: Element,
    body: Option<HtmlElement>,
    state: Cell<OverlayState>,
}

impl OverlayController {
    pub fn new(overlay: Element, button: Element, body: Option<HtmlElement>) -> Self {
        Self {
            overlay,
            button,
            body,
            state: Cell::new(OverlayState::Closed),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    pub fn handle(&self, event: OverlayEvent<'_>) {
        if let Some(next) = self.state.get().next(event) {
            let _ = self.apply(next);
        }
    }

    fn apply(&self, state: OverlayState) -> Result<(), JsValue> {
        self.state.set(state);
        let presentation = state.presentation();
        self.overlay
            .class_list()
            .toggle_with_force(selectors::OVERLAY_OPEN_CLASS, presentation.open_class)?;
        self.overlay.set_attribute("aria-hidden", presentation.aria_hidden)?;
        self.button.set_attribute("aria-expanded", presentation.aria_expanded)?;
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", presentation.body_overflow)?;
        }
        Ok(())
    }
}

/// Wire the menu button, close button, backdrop, Escape key and overlay links.
///
/// Needs both `.overlay` and `.lux-menu-btn`; without either nothing is wired.
pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let document = &page.document;
    let (Some(overlay), Some(button)) = (
        dom::query(document, selectors::OVERLAY)?,
        dom::query(document, selectors::MENU_BUTTON)?,
    ) else {
        page.trace("overlay: missing .overlay or .lux-menu-btn");
        return Ok(());
    };

    let overlay_controller = Rc::new(OverlayController::new(
        overlay.clone(),
        button.clone(),
        document.body(),
    ));

    controller.add_listener(EventListenerHandle::new(&button, "click", {
        let overlay_controller = overlay_controller.clone();
        move |_| overlay_controller.handle(OverlayEvent::OpenButton)
    })?);

    if let Some(close) = dom::query(document, selectors::OVERLAY_CLOSE)? {
        controller.add_listener(EventListenerHandle::new(&close, "click", {
            let overlay_controller = overlay_controller.clone();
            move |_| overlay_controller.handle(OverlayEvent::CloseButton)
        })?);
    }

    controller.add_listener(EventListenerHandle::new(&overlay, "click", {
        let overlay_controller = overlay_controller.clone();
        let backdrop: EventTarget = overlay.clone().unchecked_into();
        move |event| {
            let on_backdrop = event.target().as_ref() == Some(&backdrop);
            overlay_controller.handle(OverlayEvent::BackdropClick { on_backdrop });
        }
    })?);

    controller.add_listener(EventListenerHandle::new(document, "keydown", {
        let overlay_controller = overlay_controller.clone();
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                overlay_controller.handle(OverlayEvent::Key(&event.key()));
            }
        }
    })?);

    for link in dom::query_all(document, selectors::OVERLAY_LINK)? {
        controller.add_listener(EventListenerHandle::new(&link, "click", {
            let overlay_controller = overlay_controller.clone();
            move |_| overlay_controller.handle(OverlayEvent::NavLink)
        })?);
    }

    controller.set_overlay(overlay_controller);
    Ok(())
}
