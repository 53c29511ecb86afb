//! Smooth scrolling for fragment links and `data-scroll-target` elements.

use lux_page_core::anchor::{header_offset, is_interceptable_href, scroll_destination};
use lux_page_core::selectors;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::controller::PageController;
use crate::dom;
use crate::listener::EventListenerHandle;
use crate::page::Page;

/// Resolve `selector`, treating an invalid selector the same as no match.
fn resolve(page: &Page, selector: &str) -> Option<Element> {
    page.document.query_selector(selector).ok().flatten()
}

/// Computed `--header-h` on the root element, if any.
fn header_height_property(page: &Page) -> Option<String> {
    let root = page.document.document_element()?;
    let style = page.window.get_computed_style(&root).ok()??;
    style
        .get_property_value(selectors::HEADER_HEIGHT_PROPERTY)
        .ok()
}

/// Document scroll position that puts `target` just below the fixed header.
pub fn scroll_top_for(page: &Page, target: &Element) -> Result<f64, JsValue> {
    let offset = header_offset(header_height_property(page).as_deref(), &page.settings);
    Ok(scroll_destination(
        target.get_bounding_client_rect().top(),
        page.window.page_y_offset()?,
        offset,
    ))
}

/// Animate the window so `target` lands just below the fixed header.
pub fn smooth_to(page: &Page, target: &Element) -> Result<(), JsValue> {
    let top = scroll_top_for(page, target)?;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    page.window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let links = dom::query_all(&page.document, selectors::FRAGMENT_LINK)?;
    for link in &links {
        controller.add_listener(EventListenerHandle::new(link, "click", {
            let page = page.clone();
            let link = link.clone();
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                if !is_interceptable_href(&href) {
                    return;
                }
                let Some(target) = resolve(&page, &href) else {
                    return;
                };
                event.prevent_default();
                let _ = smooth_to(&page, &target);
            }
        })?);
    }

    let buttons = dom::query_all(&page.document, selectors::SCROLL_TARGET)?;
    for button in &buttons {
        controller.add_listener(EventListenerHandle::new(button, "click", {
            let page = page.clone();
            let button = button.clone();
            move |_| {
                let Some(selector) = button.get_attribute(selectors::SCROLL_TARGET_ATTR) else {
                    return;
                };
                if selector.is_empty() {
                    return;
                }
                if let Some(target) = resolve(&page, &selector) {
                    let _ = smooth_to(&page, &target);
                }
            }
        })?);
    }

    page.trace(format_args!(
        "anchor: {} fragment links, {} scroll targets",
        links.len(),
        buttons.len()
    ));
    Ok(())
}
