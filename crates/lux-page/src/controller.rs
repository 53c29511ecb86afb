//! Everything installed on a page, kept alive together.

use std::rc::Rc;

use lux_page_core::OverlayState;
use wasm_bindgen::prelude::*;

use crate::listener::EventListenerHandle;
use crate::overlay::OverlayController;
use crate::page::Page;
use crate::reveal::RevealObserver;
use crate::{anchor, form, overlay, progress, reveal, tilt, year};

/// Owns every listener and observer installed on the page.
/// Dropping it detaches all behaviors.
#[derive(Default)]
pub struct PageController {
    listeners: Vec<EventListenerHandle>,
    reveal: Option<RevealObserver>,
    overlay: Option<Rc<OverlayController>>,
}

type Installer = fn(&Page, &mut PageController) -> Result<(), JsValue>;

impl PageController {
    /// Install every behavior whose targets exist on `page`.
    ///
    /// A behavior that fails to install is reported and skipped; the others
    /// are still installed. The overlay is wired before anchors so an overlay
    /// link closes the menu before its scroll starts.
    pub fn install(page: &Page) -> Self {
        let mut controller = Self::default();

        if let Err(error) = year::install(page) {
            page.report_error("year", &error);
        }

        let installers: [(&str, Installer); 6] = [
            ("progress", progress::install),
            ("overlay", overlay::install),
            ("anchor", anchor::install),
            ("reveal", reveal::install),
            ("tilt", tilt::install),
            ("form", form::install),
        ];
        for (behavior, install) in installers {
            if let Err(error) = install(page, &mut controller) {
                page.report_error(behavior, &error);
            }
        }

        page.trace(format_args!(
            "installed {} listeners, reveal observer: {}, overlay: {}",
            controller.listeners.len(),
            controller.reveal.is_some(),
            controller.overlay.is_some(),
        ));
        controller
    }

    pub fn add_listener(&mut self, listener: EventListenerHandle) {
        self.listeners.push(listener);
    }

    pub fn set_reveal(&mut self, observer: RevealObserver) {
        self.reveal = Some(observer);
    }

    pub fn set_overlay(&mut self, overlay: Rc<OverlayController>) {
        self.overlay = Some(overlay);
    }

    /// Current overlay state, `None` when the page has no overlay menu.
    pub fn overlay_state(&self) -> Option<OverlayState> {
        self.overlay.as_ref().map(|overlay| overlay.state())
    }

    /// Number of installed listeners for `event_type`.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.event_type() == event_type)
            .count()
    }

    pub fn has_reveal_observer(&self) -> bool {
        self.reveal.is_some()
    }
}
