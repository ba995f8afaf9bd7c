use std::time::{Duration, Instant};

/// Caps the loop rate: each `tick` blocks until one frame interval has
/// passed since the previous `tick`.
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(max_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / max_fps.max(1),
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time still to wait at `now`. The first tick never waits.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Returns the time since the previous tick.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        elapsed
    }
}
