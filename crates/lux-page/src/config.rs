//! Settings overrides embedded in the page.

use lux_page_core::{Settings, selectors};
use web_sys::Document;
use zoon::eprintln;

/// Settings from `#lux-page-config`, or the defaults when the element is
/// missing or its JSON is malformed.
pub fn load(document: &Document) -> Settings {
    let Ok(Some(element)) = document.query_selector(selectors::CONFIG) else {
        return Settings::default();
    };
    let json = element.text_content().unwrap_or_default();
    match Settings::from_json(&json) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("[lux-page] ignoring {}: {error}", selectors::CONFIG);
            Settings::default()
        }
    }
}
