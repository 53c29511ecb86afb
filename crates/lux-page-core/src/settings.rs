//! Design constants, with optional per-page overrides.
//!
//! The defaults reproduce the look the page was designed with. A page may
//! override any subset of fields by embedding JSON in a
//! `<script type="application/json" id="lux-page-config">` element.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Danke! Deine Anfrage ist eingegangen – wir melden uns zeitnah";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible fraction of a `.reveal` element that triggers the reveal.
    pub reveal_threshold: f64,
    /// Maximum tilt angle in degrees for default-intensity elements.
    pub tilt_base_deg: f64,
    /// Maximum tilt angle in degrees for `data-tilt-intensity="strong"`.
    pub tilt_strong_base_deg: f64,
    pub tilt_perspective_px: f64,
    /// Upward translation applied while tilted.
    pub tilt_lift_px: f64,
    /// Header height used when `--header-h` is missing or unparsable.
    pub header_height: f64,
    /// Extra gap kept between the header and a scrolled-to element.
    pub header_buffer: f64,
    /// Message shown after the demo form is submitted.
    pub acknowledgment: String,
    /// Log installed behaviors and skipped targets to the console.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.12,
            tilt_base_deg: 8.0,
            tilt_strong_base_deg: 12.0,
            tilt_perspective_px: 900.0,
            tilt_lift_px: 1.0,
            header_height: 78.0,
            header_buffer: 10.0,
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
            debug: false,
        }
    }
}

impl Settings {
    /// Parse overrides; fields missing from `json` keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_str(json).map_err(SettingsError::Json)?;
        Ok(settings.normalized())
    }

    /// Bring out-of-range values back to something the browser accepts.
    pub fn normalized(mut self) -> Self {
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            Self::default().reveal_threshold
        };
        self
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(error) => write!(f, "invalid settings JSON: {error}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(error) => Some(error),
        }
    }
}
