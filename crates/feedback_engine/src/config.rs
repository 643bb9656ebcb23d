use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before a valid submit is confirmed.
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 1000;

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to ./feedback_form.log in current directory.
    #[default]
    File,
    /// Write to terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub confirmation_delay_ms: u64,
    pub log_destination: LogDestination,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
            log_destination: LogDestination::default(),
        }
    }
}

impl FormConfig {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            confirmation_delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}
