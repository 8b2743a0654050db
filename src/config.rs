use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MonitorError, Result};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_TOP_N: usize = 30;
pub const DEFAULT_NAME_WIDTH: usize = 30;

/// Below this sysinfo cannot compute a CPU usage delta.
pub const MIN_TICK_INTERVAL: Duration = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;
/// One day of samples at the default interval.
pub const MAX_HISTORY_CAPACITY: usize = 86_400;
pub const MAX_TOP_N: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Delay between the end of one tick and the start of the next.
    pub tick_interval: Duration,
    /// Samples kept per rolling history.
    pub history_capacity: usize,
    /// Rows kept in the ranked process list.
    pub top_n: usize,
    /// Characters of the process name shown in the table.
    pub name_width: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            top_n: DEFAULT_TOP_N,
            name_width: DEFAULT_NAME_WIDTH,
            log_file: None,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval < MIN_TICK_INTERVAL {
            return Err(MonitorError::Config(format!(
                "tick interval must be at least {}ms",
                MIN_TICK_INTERVAL.as_millis()
            )));
        }
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(MonitorError::Config(format!(
                "history capacity must be between 1 and {MAX_HISTORY_CAPACITY}"
            )));
        }
        if !(1..=MAX_TOP_N).contains(&self.top_n) {
            return Err(MonitorError::Config(format!(
                "top process count must be between 1 and {MAX_TOP_N}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_mode() {
        let config = MonitorConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.top_n, 30);
        assert_eq!(config.name_width, 30);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = MonitorConfig { history_capacity: 0, ..MonitorConfig::default() };
        assert!(matches!(config.validate(), Err(MonitorError::Config(_))));
    }

    #[test]
    fn zero_interval_rejected() {
        let config = MonitorConfig { tick_interval: Duration::ZERO, ..MonitorConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn interval_below_cpu_refresh_floor_rejected() {
        let config = MonitorConfig { tick_interval: Duration::from_millis(1), ..MonitorConfig::default() };
        assert!(matches!(config.validate(), Err(MonitorError::Config(_))));

        let config = MonitorConfig { tick_interval: MIN_TICK_INTERVAL, ..MonitorConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_history_and_top_rejected() {
        let config = MonitorConfig { history_capacity: usize::MAX, ..MonitorConfig::default() };
        assert!(matches!(config.validate(), Err(MonitorError::Config(_))));

        let config = MonitorConfig { top_n: MAX_TOP_N + 1, ..MonitorConfig::default() };
        assert!(matches!(config.validate(), Err(MonitorError::Config(_))));

        let config = MonitorConfig {
            history_capacity: MAX_HISTORY_CAPACITY,
            top_n: MAX_TOP_N,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
