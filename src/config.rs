//! Bridge configuration
//!
//! Builder-style like `android_logger::Config`: start from `Default` and
//! chain `with_*` calls.

use log::LevelFilter;

pub const DEFAULT_LOG_TAG: &str = "SurfaceBridge";

const LOG_ENV: &str = "SURFACE_BRIDGE_LOG";
const SCALE_ENV: &str = "SURFACE_BRIDGE_SCALE";

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    pub log_tag: String,
    pub max_level: LevelFilter,
    /// Multiplier from platform input units to surface pixels.
    /// Android reports pixels (1.0); iOS reports points (native screen scale).
    pub scale_factor: f32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_tag: DEFAULT_LOG_TAG.to_string(),
            max_level: LevelFilter::Debug,
            scale_factor: 1.0,
        }
    }
}

impl BridgeConfig {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.log_tag = tag.into();
        self
    }

    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    /// Non-finite or non-positive factors are ignored.
    pub fn with_scale_factor(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.scale_factor = scale;
        } else {
            log::warn!("ignoring invalid scale factor {}", scale);
        }
        self
    }

    /// Read overrides from `SURFACE_BRIDGE_LOG` and `SURFACE_BRIDGE_SCALE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_ENV) {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => config.max_level = level,
                Err(_) => log::warn!("{}: unknown level {:?}, keeping default", LOG_ENV, level),
            }
        }

        if let Some(scale) = lookup(SCALE_ENV) {
            match scale.trim().parse::<f32>() {
                Ok(scale) => config = config.with_scale_factor(scale),
                Err(_) => log::warn!("{}: not a number {:?}, keeping default", SCALE_ENV, scale),
            }
        }

        config
    }
}
