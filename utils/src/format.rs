//! Display formatting for arbitrary values.

use std::fmt::Display;

/// Label placed in front of every formatted value.
pub const OUTPUT_PREFIX: &str = "Formatted: ";

/// Format `data` for display as `"Formatted: <data>"`.
///
/// Uses the value's `Display` rendering unchanged. Formatting an already
/// formatted string prefixes it again.
pub fn format_output<T: Display + ?Sized>(data: &T) -> String {
    format!("{OUTPUT_PREFIX}{data}")
}
