//! Client-side request budget.
//!
//! The Brawlhalla API allows a fixed number of requests per 15 minutes and
//! per second. [`RateBucket`] records when requests were sent and makes
//! callers wait until both windows have room again. A limit of 0 leaves
//! that window unbounded.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

pub const LONG_WINDOW: Duration = Duration::from_secs(15 * 60);
pub const SHORT_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Window {
    span: Duration,
    limit: u32,
    sent: VecDeque<Instant>,
}

impl Window {
    fn new(span: Duration, limit: u32) -> Self {
        Self {
            span,
            limit,
            sent: VecDeque::new(),
        }
    }

    fn unlimited(&self) -> bool {
        self.limit == 0
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&first) = self.sent.front() {
            if now.duration_since(first) >= self.span {
                self.sent.pop_front();
            } else {
                break;
            }
        }
    }

    fn remaining(&self) -> u32 {
        if self.unlimited() {
            u32::MAX
        } else {
            self.limit.saturating_sub(self.sent.len() as u32)
        }
    }

    /// How long until a slot frees up; zero when one is free now.
    fn wait_time(&self, now: Instant) -> Duration {
        if self.unlimited() || (self.sent.len() as u32) < self.limit {
            return Duration::ZERO;
        }
        match self.sent.front() {
            Some(&first) => (first + self.span).saturating_duration_since(now),
            None => self.span,
        }
    }
}

#[derive(Debug)]
struct Windows {
    long: Window,
    short: Window,
}

impl Windows {
    fn wait_time(&mut self, now: Instant) -> Duration {
        self.long.prune(now);
        self.short.prune(now);
        self.long.wait_time(now).max(self.short.wait_time(now))
    }

    fn record(&mut self, now: Instant) {
        for window in [&mut self.long, &mut self.short] {
            if !window.unlimited() {
                window.sent.push_back(now);
            }
        }
    }
}

/// Sliding-window limiter over a 15 minute and a 1 second budget.
///
/// Shared by every clone of a client, so concurrent requests draw from the
/// same budget.
#[derive(Debug)]
pub struct RateBucket {
    requests_per_15_minutes: u32,
    requests_per_second: u32,
    windows: Mutex<Windows>,
}

impl RateBucket {
    pub fn new(requests_per_15_minutes: u32, requests_per_second: u32) -> Self {
        Self {
            requests_per_15_minutes,
            requests_per_second,
            windows: Mutex::new(Windows {
                long: Window::new(LONG_WINDOW, requests_per_15_minutes),
                short: Window::new(SHORT_WINDOW, requests_per_second),
            }),
        }
    }

    pub fn requests_per_15_minutes(&self) -> u32 {
        self.requests_per_15_minutes
    }

    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second
    }

    /// Wait until both windows have room, then take a slot.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut windows = self.windows.lock().await;
                let now = Instant::now();
                let wait = windows.wait_time(now);
                if wait.is_zero() {
                    windows.record(now);
                    return;
                }
                wait
            };

            tracing::trace!(?wait, "rate bucket full, waiting");
            sleep(wait).await;
        }
    }

    /// Take a slot only if one is free right now.
    pub async fn try_acquire(&self) -> bool {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        if windows.wait_time(now).is_zero() {
            windows.record(now);
            true
        } else {
            false
        }
    }

    /// Slots left in the tighter of the two windows. `u32::MAX` when both
    /// windows are unbounded.
    pub async fn remaining(&self) -> u32 {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        windows.long.prune(now);
        windows.short.prune(now);
        windows.long.remaining().min(windows.short.remaining())
    }
}
