//! Footer year stamp.

/// Text placed into the `#year` element.
pub fn stamp_text(full_year: u32) -> String {
    full_year.to_string()
}
