//! Configuration loading.

use tracing::debug;

/// Configuration keys mapped to their values.
pub type Config = toml::Table;

/// Load the configuration.
///
/// Not implemented yet: no file is read and the returned table is always
/// empty. A fresh table is built on every call.
pub fn load_config() -> Config {
    // TODO: read from a config file once its location and schema are decided.
    debug!("config loading not implemented; returning empty config");
    Config::new()
}
