//! Interactivity for the lux landing page, compiled to WebAssembly.
//!
//! Loading the module runs `bootstrap::run`, which waits for the DOM and then
//! installs every behavior whose target elements exist on the page:
//!
//! - `year`: current year in the footer.
//! - `progress`: scroll progress bar.
//! - `overlay`: full-screen navigation menu.
//! - `anchor`: smooth scrolling for in-page links.
//! - `reveal`: reveal-on-scroll animations.
//! - `tilt`: cursor-driven 3D tilt.
//! - `form`: demo contact form.
//!
//! The pure calculations live in `lux_page_core`; this crate only reads the
//! DOM, calls into the core and writes the results back.

use wasm_bindgen::prelude::*;

pub mod anchor;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod dom;
pub mod form;
pub mod listener;
pub mod overlay;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod tilt;
pub mod year;

pub use controller::PageController;
pub use page::Page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    bootstrap::run()
}

/// Remove every listener installed by `start`.
#[wasm_bindgen]
pub fn teardown() {
    bootstrap::teardown();
}
