//! Demo contact form: acknowledges instead of submitting.

use lux_page_core::selectors;
use wasm_bindgen::prelude::*;

use crate::controller::PageController;
use crate::dom;
use crate::listener::EventListenerHandle;
use crate::page::Page;

pub fn install(page: &Page, controller: &mut PageController) -> Result<(), JsValue> {
    let Some(form) = dom::query(&page.document, selectors::CONTACT_FORM)? else {
        page.trace("form: no .contact-form element");
        return Ok(());
    };
    controller.add_listener(EventListenerHandle::new(&form, "submit", {
        let window = page.window.clone();
        let settings = page.settings.clone();
        move |event| {
            event.prevent_default();
            let _ = window.alert_with_message(&settings.acknowledgment);
        }
    })?);
    Ok(())
}
