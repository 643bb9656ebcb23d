use std::time::Duration;

use thiserror::Error;
use tokio::time::{timeout, Instant};

use crate::{QueryError, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(1000),
            interval: Duration::from_millis(50),
        }
    }
}

impl WaitOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    #[error("timed out after {timeout:?}: {last}")]
    Timeout { timeout: Duration, last: QueryError },
}

/// Re-runs `check` after every render and every `interval` until it succeeds
/// or `timeout` elapses. A timeout too large to add to the current instant
/// waits without a deadline.
pub async fn wait_for<T, F>(
    screen: &Screen,
    options: WaitOptions,
    mut check: F,
) -> Result<T, WaitError>
where
    F: FnMut(&Screen) -> Result<T, QueryError>,
{
    let deadline = Instant::now().checked_add(options.timeout);
    let mut renders = screen.subscribe();
    loop {
        let last = match check(screen) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let step = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(WaitError::Timeout {
                        timeout: options.timeout,
                        last,
                    });
                }
                options.interval.min(deadline - now)
            }
            None => options.interval,
        };
        if let Ok(Err(_)) = timeout(step, renders.changed()).await {
            // Form unmounted: nothing will re-render, keep polling on the interval.
            tokio::time::sleep(step).await;
        }
    }
}
