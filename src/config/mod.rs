use serde::{Deserialize, Serialize};

use crate::error::GreeterResult;

pub mod log;
pub mod ticker;

pub use self::log::{Level, LogConfig};
pub use self::ticker::TickerConfig;

/// Compiled into the binary; nothing is read from disk at runtime.
pub static DEFAULT_CONFIG: &str = include_str!("../../default_config/greeter.toml");

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GreeterConfig {
    pub ticker: TickerConfig,
    pub log: LogConfig,
}

impl GreeterConfig {
    pub fn builtin() -> GreeterResult<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn from_toml(s: &str) -> GreeterResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.ticker.schedule()?;
        Ok(config)
    }
}
