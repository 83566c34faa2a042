//! Live clock driving the header's date/time display.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::MAX_CLOCK_PERIOD_MS;
use crate::{UiError, UiResult};

/// One clock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub now: DateTime<Local>,
    /// Number of ticks since the clock started (0 before the first tick).
    pub ticks: u64,
}

/// Periodic task publishing the current local time.
///
/// The task runs for as long as the `Clock` is alive. Dropping it aborts the
/// task, so no reading is published after teardown.
#[derive(Debug)]
pub struct Clock {
    reading: watch::Receiver<ClockReading>,
    task: JoinHandle<()>,
}

impl Clock {
    /// Spawn the ticking task on the current tokio runtime.
    ///
    /// `period` must be non-zero and at most one second.
    pub fn start(period: Duration) -> UiResult<Self> {
        if period.is_zero() {
            return Err(UiError::config("clock period must be greater than zero"));
        }
        if period > Duration::from_millis(MAX_CLOCK_PERIOD_MS) {
            return Err(UiError::config(format!(
                "clock period must be at most {MAX_CLOCK_PERIOD_MS} ms, got {period:?}"
            )));
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| UiError::NoRuntime)?;

        let (tx, rx) = watch::channel(ClockReading {
            now: Local::now(),
            ticks: 0,
        });
        let first_tick = Instant::now() + period;

        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let mut ticks = 0u64;
            loop {
                interval.tick().await;
                ticks += 1;
                tx.send_replace(ClockReading {
                    now: Local::now(),
                    ticks,
                });
            }
        });

        tracing::debug!(
            period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
            "clock started"
        );
        Ok(Self { reading: rx, task })
    }

    pub fn reading(&self) -> ClockReading {
        *self.reading.borrow()
    }

    pub fn now(&self) -> DateTime<Local> {
        self.reading.borrow().now
    }

    /// Receiver woken on every tick; reports closed once the clock is dropped.
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.reading.clone()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("clock stopped");
    }
}
