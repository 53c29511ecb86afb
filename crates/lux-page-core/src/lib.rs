//! Host-independent logic for the lux landing page controller.
//!
//! Everything here is plain computation over numbers and strings:
//! no `web_sys`, no `wasm_bindgen`, no `RefCell`. The browser crate
//! (`lux-page`) reads DOM values, feeds them through these functions
//! and writes the results back.
//!
//! - `scroll`: scroll-progress ratio.
//! - `overlay`: overlay menu state machine and its DOM presentation.
//! - `anchor`: header offset and smooth-scroll destination.
//! - `reveal`: one-way reveal state.
//! - `tilt`: cursor-driven rotation.
//! - `settings`: design constants, optionally overridden from JSON.
//! - `selectors`: the selectors and class names the page uses.
//! - `year`: footer year text.

pub mod anchor;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod selectors;
pub mod settings;
pub mod tilt;
pub mod year;

pub use overlay::{OverlayEvent, OverlayPresentation, OverlayState};
pub use reveal::RevealState;
pub use scroll::ScrollMetrics;
pub use settings::{Settings, SettingsError};
pub use tilt::{Rotation, TiltIntensity};

/// Format a number the way a CSS value is written: shortest form,
/// integral values without a fraction, never `-0`.
pub fn css_number(value: f64) -> String {
    // `-0.0 + 0.0` is `+0.0`
    format!("{}", value + 0.0)
}
