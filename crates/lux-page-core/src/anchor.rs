//! Smooth anchor scrolling.

use crate::settings::Settings;

/// Whether a fragment link's `href` is worth resolving at all.
/// The bare `#` (and anything not starting with `#`) is left to the browser.
pub fn is_interceptable_href(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Parse the leading number of a CSS value the way `parseFloat` does:
/// leading whitespace skipped, trailing units and garbage ignored.
pub fn parse_css_length(raw: &str) -> Option<f64> {
    let value = raw.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    value[..end].parse().ok()
}

/// Distance kept between the viewport top and a scrolled-to element.
///
/// `raw_header_height` is the computed `--header-h` value. Missing, unparsable,
/// zero and non-finite values fall back to `Settings::header_height`.
pub fn header_offset(raw_header_height: Option<&str>, settings: &Settings) -> f64 {
    let height = raw_header_height
        .and_then(parse_css_length)
        .filter(|height| height.is_finite() && *height != 0.0)
        .unwrap_or(settings.header_height);
    height + settings.header_buffer
}

/// Document-relative scroll position that puts an element just below the header.
pub fn scroll_destination(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}
