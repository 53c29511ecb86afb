//! Cursor-driven tilt on `[data-tilt]` elements.

use lux_page_core::selectors;
use lux_page_core::tilt::{Rotation, TiltIntensity, normalized_pointer};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::controller::PageController;
use crate::dom;
use crate::listener::EventListenerHandle;
use crate::page::Page;

/// Rotation for a cursor at viewport coordinates (`client_x`, `client_y`),
/// `None` when the element has no area.
pub fn rotation_at(
    element: &Element,
    client_x: f64,
    client_y: f64,
    base_deg: f64,
) -> Option<Rotation> {
    let rect = element.get_bounding_client_rect();
    let x = normalized_pointer(client_x, rect.left(), rect.width())?;
    let y = normalized_pointer(client_y, rect.top(), rect.height())?;
    Some(Rotation::from_pointer(x, y, base_deg))
}

pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let elements = dom::query_all(&page.document, selectors::TILT)?;
    for element in &elements {
        let intensity = TiltIntensity::from_attribute(
            element.get_attribute(selectors::TILT_INTENSITY_ATTR).as_deref(),
        );
        let base_deg = intensity.base_deg(&page.settings);

        controller.add_listener(EventListenerHandle::new(element, "mousemove", {
            let element = element.clone();
            let settings = page.settings.clone();
            move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                // Whole CSS pixels; sub-pixel precision is invisible at these angles.
                let client_x = f64::from(event.client_x());
                let client_y = f64::from(event.client_y());
                if let Some(rotation) = rotation_at(&element, client_x, client_y, base_deg) {
                    let _ = dom::set_style(&element, "transform", &rotation.transform(&settings));
                }
            }
        })?);

        controller.add_listener(EventListenerHandle::new(element, "mouseleave", {
            let element = element.clone();
            move |_| {
                let _ = dom::set_style(&element, "transform", "");
            }
        })?);
    }
    page.trace(format_args!("tilt: {} elements", elements.len()));
    Ok(())
}
