//! Handles to the host page shared by every behavior.

use std::fmt::Display;
use std::rc::Rc;

use lux_page_core::Settings;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};
use zoon::{eprintln, println};

use crate::config;

/// Window and document the wasm module was loaded into.
pub fn host() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok((window, document))
}

#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub settings: Rc<Settings>,
}

impl Page {
    pub fn new(window: Window, document: Document, settings: Settings) -> Self {
        Self {
            window,
            document,
            settings: Rc::new(settings),
        }
    }

    /// The page the wasm module was loaded into, configured from its
    /// `#lux-page-config` element.
    pub fn current() -> Result<Self, JsValue> {
        let (window, document) = host()?;
        let settings = config::load(&document);
        Ok(Self::new(window, document, settings))
    }

    /// Console trace, only when `Settings::debug` is on.
    pub fn trace(&self, message: impl Display) {
        if self.settings.debug {
            println!("[lux-page] {message}");
        }
    }

    pub fn report_error(&self, behavior: &str, error: &JsValue) {
        eprintln!("[lux-page] {behavior} failed to install: {error:?}");
    }
}
