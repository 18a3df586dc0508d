use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Polling behaviour of a single [`PollingDataSource`](super::PollingDataSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Whether automatic polling is active.
    pub enabled: bool,
    /// Time between automatic fetches while enabled.
    pub interval_ms: u32,
    /// Automatic retries allowed after consecutive failures. Zero surfaces
    /// the first failure without retrying.
    pub max_retries: u32,
    /// Delay before each automatic retry.
    pub retry_delay_ms: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            enabled: Config::ENABLE_AUTO_REFRESH,
            interval_ms: Config::POLLING_INTERVAL_MS,
            max_retries: Config::MAX_RETRIES,
            retry_delay_ms: Config::RETRY_DELAY_MS,
        }
    }
}

impl PollingConfig {
    /// Returns a copy with every field set in `update` replaced.
    pub fn merged(self, update: PollingConfigUpdate) -> Self {
        Self {
            enabled: update.enabled.unwrap_or(self.enabled),
            interval_ms: update.interval_ms.unwrap_or(self.interval_ms),
            max_retries: update.max_retries.unwrap_or(self.max_retries),
            retry_delay_ms: update.retry_delay_ms.unwrap_or(self.retry_delay_ms),
        }
    }

    /// Interval actually used to arm the polling timer.
    pub fn effective_interval_ms(&self) -> u32 {
        self.interval_ms.max(Config::MIN_TIMER_MS)
    }

    /// Delay actually used to arm the retry timer.
    pub fn effective_retry_delay_ms(&self) -> u32 {
        self.retry_delay_ms.max(Config::MIN_TIMER_MS)
    }
}

// CONFIGURATION UPDATE
/// Partial [`PollingConfig`]; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollingConfigUpdate {
    enabled: Option<bool>,
    interval_ms: Option<u32>,
    max_retries: Option<u32>,
    retry_delay_ms: Option<u32>,
}

impl PollingConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether automatic polling is active.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the polling interval.
    pub fn interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Sets the automatic retry budget.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the delay before each automatic retry.
    pub fn retry_delay_ms(mut self, retry_delay_ms: u32) -> Self {
        self.retry_delay_ms = Some(retry_delay_ms);
        self
    }

    pub fn enabled_value(&self) -> Option<bool> {
        self.enabled
    }

    pub fn interval_value(&self) -> Option<u32> {
        self.interval_ms
    }
}

impl From<PollingConfig> for PollingConfigUpdate {
    fn from(config: PollingConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            interval_ms: Some(config.interval_ms),
            max_retries: Some(config.max_retries),
            retry_delay_ms: Some(config.retry_delay_ms),
        }
    }
}
