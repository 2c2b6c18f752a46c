//! Small display and input helpers shared across the project.
//!
//! - **[`format`]**: renders a value for display behind a fixed label.
//! - **[`validate`]**: checks that user input is present and renders to
//!   something non-empty.
//! - **[`config`]**: configuration loading. Currently a placeholder that
//!   always yields an empty table.
//!
//! The three helpers are total: none of them returns an error or panics.
//! [`logging`] is opt-in plumbing for host applications.

pub mod config;
pub mod format;
pub mod logging;
pub mod validate;

pub use config::{Config, load_config};
pub use format::format_output;
pub use validate::validate_input;
