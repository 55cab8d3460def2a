//! Platform logger setup
//!
//! Android logs to logcat, iOS to the unified log, everything else through
//! `env_logger`. Safe to call more than once; only the first call installs.

use once_cell::sync::OnceCell;

use crate::config::BridgeConfig;

static INSTALLED: OnceCell<()> = OnceCell::new();

pub fn init(config: &BridgeConfig) {
    INSTALLED.get_or_init(|| install(config));
}

#[cfg(target_os = "android")]
fn install(config: &BridgeConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.max_level)
            .with_tag(config.log_tag.clone()),
    );
}

#[cfg(target_os = "ios")]
fn install(config: &BridgeConfig) {
    if let Err(e) = oslog::OsLogger::new(&config.log_tag)
        .level_filter(config.max_level)
        .init()
    {
        eprintln!("{}: logger already installed: {}", config.log_tag, e);
    }
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
fn install(config: &BridgeConfig) {
    // A test harness or the host may already own the global logger.
    let _ = env_logger::Builder::new()
        .filter_level(config.max_level)
        .parse_default_env()
        .try_init();
}
