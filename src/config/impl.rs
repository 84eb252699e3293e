use std::sync::{Arc, OnceLock};

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from `path` (or `config.toml` in the current
/// directory) plus `VB__*` environment overrides. Only the first call has
/// any effect.
///
/// # Examples
/// ```no_run
/// use visit_badge::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::load(path.unwrap_or(DEFAULT_CONFIG_PATH))))
        .clone()
}
