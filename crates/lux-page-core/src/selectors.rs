//! Selectors, attributes and class names shared with the page markup.

pub const YEAR: &str = "#year";
pub const SCROLL_FILL: &str = ".scroll-bar__fill";

pub const OVERLAY: &str = ".overlay";
pub const MENU_BUTTON: &str = ".lux-menu-btn";
pub const OVERLAY_CLOSE: &str = ".overlay__close";
pub const OVERLAY_LINK: &str = ".overlay__link";
pub const OVERLAY_OPEN_CLASS: &str = "overlay--open";

pub const FRAGMENT_LINK: &str = "a[href^=\"#\"]";
pub const SCROLL_TARGET: &str = "[data-scroll-target]";
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-target";
/// Custom property holding the fixed header height.
pub const HEADER_HEIGHT_PROPERTY: &str = "--header-h";

pub const REVEAL: &str = ".reveal";
pub const REVEALED_CLASS: &str = "in-view";

pub const TILT: &str = "[data-tilt]";
pub const TILT_INTENSITY_ATTR: &str = "data-tilt-intensity";

pub const CONTACT_FORM: &str = ".contact-form";

/// `<script type="application/json">` element carrying `Settings` overrides.
pub const CONFIG: &str = "#lux-page-config";
