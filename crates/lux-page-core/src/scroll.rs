//! Scroll progress indicator.

use crate::css_number;

/// Vertical extents of the document at the time of a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset (`scrollTop`).
    pub offset: f64,
    /// Full height of the scrollable content (`scrollHeight`).
    pub scroll_height: f64,
    /// Visible height (`clientHeight`).
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            client_height,
        }
    }

    /// Largest reachable offset, floored at 1 so short pages never divide by zero.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_height - self.client_height).max(1.0)
    }

    pub fn ratio(&self) -> f64 {
        self.offset / self.max_offset()
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Inline `width` value for the progress fill.
pub fn progress_width(percent: f64) -> String {
    format!("{}%", css_number(percent))
}
