use lux_page_core::{selectors, year::stamp_text};
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::page::Page;

/// Put the current calendar year into `#year`.
pub fn install(page: &Page) -> Result<(), JsValue> {
    let Some(element) = dom::query(&page.document, selectors::YEAR)? else {
        page.trace("year: no #year element");
        return Ok(());
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&stamp_text(year)));
    Ok(())
}
