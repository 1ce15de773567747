use std::time::Duration;

use crate::config::{MAX_SPEED_MS, MIN_SPEED_MS};

/// Whether generations are being advanced.
///
/// `Stopped` and `Paused` both halt the loop; they only differ in how the
/// halt came about (explicit reset vs. the pause control).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunMode {
    pub fn is_halted(self) -> bool {
        self != RunMode::Running
    }
}

/// Variable-interval generation clock.
///
/// Driven by an external tick source that reports the time elapsed since
/// its previous tick. A generation is due once the time since the last
/// committed generation reaches the interval; the baseline then restarts
/// from zero rather than stepping forward by one interval, so a slow tick
/// never yields more than one generation.
#[derive(Clone, Debug)]
pub struct Scheduler {
    mode: RunMode,
    interval: Duration,
    /// Time since the last committed generation, `None` until the first
    /// tick after starting
    since_commit: Option<Duration>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            mode: RunMode::Stopped,
            interval: clamp_interval(interval),
            since_commit: None,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self) {
        if self.mode != RunMode::Running {
            self.mode = RunMode::Running;
            self.since_commit = None;
        }
    }

    /// RUNNING -> PAUSED. A halted scheduler stays as it is.
    pub fn pause(&mut self) {
        if self.mode == RunMode::Running {
            self.mode = RunMode::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.mode = RunMode::Stopped;
        self.since_commit = None;
    }

    /// Start/pause control: RUNNING pauses, anything else starts
    pub fn toggle_running(&mut self) {
        if self.mode == RunMode::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Change the interval, effective from the next tick. Returns the
    /// interval actually applied after clamping.
    pub fn set_interval(&mut self, interval: Duration) -> Duration {
        self.interval = clamp_interval(interval);
        self.interval
    }

    /// Nominal rate for the current interval, rounded
    pub fn generations_per_second(&self) -> u64 {
        let ms = self.interval.as_millis().max(1) as f64;
        (1000.0 / ms).round() as u64
    }

    /// Feed the time elapsed since the previous tick. Returns true when
    /// exactly one generation should be committed now.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.mode.is_halted() {
            return false;
        }

        let since = match self.since_commit {
            // No baseline yet: the first tick after starting commits at once
            None => {
                self.since_commit = Some(Duration::ZERO);
                return true;
            }
            Some(since) => since.saturating_add(elapsed),
        };

        if since >= self.interval {
            self.since_commit = Some(Duration::ZERO);
            true
        } else {
            self.since_commit = Some(since);
            false
        }
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(
        Duration::from_millis(MIN_SPEED_MS),
        Duration::from_millis(MAX_SPEED_MS),
    )
}
