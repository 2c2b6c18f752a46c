//! Basic user input validation.

use std::fmt::Display;

/// Return `true` when `input` is present and renders to a non-empty string.
///
/// `None` is the absence sentinel and is always invalid. Any present value
/// is judged by its `Display` output only, so `0` and `" "` are valid while
/// `""` is not.
pub fn validate_input<T: Display + ?Sized>(input: Option<&T>) -> bool {
    input.is_some_and(|value| !value.to_string().is_empty())
}
