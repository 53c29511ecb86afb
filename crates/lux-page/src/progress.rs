//! Scroll progress bar.

use lux_page_core::scroll::{ScrollMetrics, progress_width};
use lux_page_core::selectors;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::controller::PageController;
use crate::dom;
use crate::listener::EventListenerHandle;
use crate::page::Page;

/// Current document scroll extents.
pub fn current_metrics(document: &Document) -> Option<ScrollMetrics> {
    let root = document.document_element()?;
    Some(ScrollMetrics::new(
        f64::from(root.scroll_top()),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

fn update(document: &Document, fill: &Element) -> Result<(), JsValue> {
    let Some(metrics) = current_metrics(document) else {
        return Ok(());
    };
    dom::set_style(fill, "width", &progress_width(metrics.percent()))
}

/// Size the fill once now, then again on every scroll.
pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let Some(fill) = dom::query(&page.document, selectors::SCROLL_FILL)? else {
        page.trace("progress: no .scroll-bar__fill element");
        return Ok(());
    };

    let document = page.document.clone();
    controller.add_listener(EventListenerHandle::passive(&page.window, "scroll", {
        let fill = fill.clone();
        move |_| {
            let _ = update(&document, &fill);
        }
    })?);

    update(&page.document, &fill)
}
