use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::emitter::Schedule;
use crate::error::{GreeterError, GreeterResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TickerConfig {
    pub initial_delay_ms: u64,
    pub period_ms: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 3000,
            period_ms: 3000,
        }
    }
}

impl TickerConfig {
    pub fn schedule(&self) -> GreeterResult<Schedule> {
        if self.period_ms == 0 {
            return Err(GreeterError::Config("ticker.period_ms must be > 0".into()));
        }

        Ok(Schedule {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            period: Duration::from_millis(self.period_ms),
        })
    }
}
