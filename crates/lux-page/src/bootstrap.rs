//! One-time page setup.
//!
//! `run` installs the `PageController` as soon as the DOM is parsed, either
//! right away or on `DOMContentLoaded`. The controller is parked in a
//! thread-local slot for the rest of the page's life.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use zoon::eprintln;

use crate::controller::PageController;
use crate::listener::EventListenerHandle;
use crate::page::{self, Page};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    /// `DOMContentLoaded` listener while the document is still loading.
    static PENDING: RefCell<Option<EventListenerHandle>> = const { RefCell::new(None) };
}

pub fn is_installed() -> bool {
    CONTROLLER.with(|controller| controller.borrow().is_some())
}

/// Install on the current page once its DOM is ready. Later calls are no-ops.
pub fn run() -> Result<(), JsValue> {
    if is_installed() || PENDING.with(|pending| pending.borrow().is_some()) {
        return Ok(());
    }
    let (_, document) = page::host()?;
    if document.ready_state() == "loading" {
        // Stays registered until `teardown`; `DOMContentLoaded` fires only once.
        let listener = EventListenerHandle::new(&document, "DOMContentLoaded", |_| {
            if let Err(error) = install_now() {
                eprintln!("[lux-page] setup failed: {error:?}");
            }
        })?;
        PENDING.with(|pending| *pending.borrow_mut() = Some(listener));
        return Ok(());
    }
    install_now()
}

fn install_now() -> Result<(), JsValue> {
    if is_installed() {
        return Ok(());
    }
    let page = Page::current()?;
    let controller = PageController::install(&page);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

/// Detach every behavior. `run` may install again afterwards.
pub fn teardown() {
    PENDING.with(|pending| pending.borrow_mut().take());
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    drop(controller);
}
