//! Small DOM helpers shared by the behaviors.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

/// First element matching `selector`, `None` when there is none.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, JsValue> {
    document.query_selector(selector)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Set (or with an empty `value`, clear) an inline style property.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    if value.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, value)?;
    }
    Ok(())
}
