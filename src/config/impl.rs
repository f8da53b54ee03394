use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to loading defaults when
/// `init_config()` has not been called yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `.env` first, then the TOML file at `path` (default `config.toml`),
/// then `BM__*` environment overrides. Only the first call has any effect.
///
/// # Examples
/// ```no_run
/// use bookmarker::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    dotenvy::dotenv().ok();
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// Replace the global configuration (used by the CLI after flag overrides)
pub fn update_config(config: StaticConfig) {
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(config)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(config));
        }
    }
}
