use std::time::{Duration, Instant};

/// Seconds elapsed since `since` on the monotonic clock.
#[inline]
pub fn elapsed_seconds(since: Instant) -> f64 {
    since.elapsed().as_secs_f64()
}

/// Monotonic elapsed-time helper.
///
/// Typical uses are measuring load phases and rate-limiting console refreshes.
#[derive(Debug, Copy, Clone)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts a stopwatch at the current instant.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(self.start)
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Returns the elapsed seconds and moves the baseline to now.
    pub fn restart(&mut self) -> f64 {
        let now = Instant::now();
        let secs = now.saturating_duration_since(self.start).as_secs_f64();
        self.start = now;
        secs
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
