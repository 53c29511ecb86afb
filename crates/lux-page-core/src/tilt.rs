//! Cursor-driven 3D tilt.

use crate::css_number;
use crate::settings::Settings;

/// `data-tilt-intensity` value selecting the stronger tilt.
pub const STRONG_INTENSITY: &str = "strong";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TiltIntensity {
    #[default]
    Default,
    Strong,
}

impl TiltIntensity {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(STRONG_INTENSITY) => Self::Strong,
            _ => Self::Default,
        }
    }

    /// Maximum rotation in degrees.
    pub fn base_deg(self, settings: &Settings) -> f64 {
        match self {
            Self::Default => settings.tilt_base_deg,
            Self::Strong => settings.tilt_strong_base_deg,
        }
    }
}

/// Cursor coordinate relative to a box edge, as a fraction of the box extent.
///
/// `None` for degenerate boxes (zero or negative extent), which have no
/// meaningful cursor position.
pub fn normalized_pointer(client: f64, origin: f64, extent: f64) -> Option<f64> {
    if !extent.is_finite() || extent <= 0.0 {
        return None;
    }
    Some((client - origin) / extent)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    /// Rotation for a normalized cursor position; (0.5, 0.5) is the center.
    pub fn from_pointer(x: f64, y: f64, base_deg: f64) -> Self {
        Self {
            x_deg: ((0.5 - y) * base_deg).clamp(-base_deg, base_deg),
            y_deg: ((x - 0.5) * base_deg).clamp(-base_deg, base_deg),
        }
    }

    /// Inline `transform` value: perspective projection, rotation, slight lift.
    pub fn transform(&self, settings: &Settings) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            css_number(settings.tilt_perspective_px),
            css_number(self.x_deg),
            css_number(self.y_deg),
            css_number(-settings.tilt_lift_px),
        )
    }
}
