use std::time::{Duration, Instant};

/// Timing handed to one tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock started, summed from clamped steps so stalls
    /// do not jump it forward.
    pub elapsed: f32,

    /// When the tick was taken.
    pub now: Instant,

    /// Ticks before this one.
    pub frame_index: u64,
}

impl FrameTime {
    /// Timing for work that runs before the first tick.
    pub fn start(now: Instant) -> Self {
        Self { dt: 0.0, elapsed: 0.0, now, frame_index: 0 }
    }
}

/// Measures clamped delta time between ticks.
///
/// A debugger pause or a stalled window must not hand `update` a
/// multi-second step, so each step is clamped into `[dt_min, dt_max]`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f32,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clamps delta time to [0.1 ms, 250 ms].
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts delta measurement from now, e.g. after `initialize` loaded assets.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max)
            .as_secs_f32();

        self.last = now;
        self.elapsed += dt;

        let time = FrameTime {
            dt,
            elapsed: self.elapsed,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn back_to_back_ticks_hit_the_lower_clamp() {
        let mut clock = FrameClock::with_clamps(ms(5), ms(50));
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert!((clock.tick_at(t0).dt - 0.005).abs() < 1e-6);
    }

    #[test]
    fn long_stall_hits_the_upper_clamp() {
        let mut clock = FrameClock::with_clamps(Duration::from_micros(1), ms(10));
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert!((clock.tick_at(t0 + ms(30)).dt - 0.010).abs() < 1e-6);
    }

    #[test]
    fn elapsed_sums_clamped_steps() {
        let mut clock = FrameClock::with_clamps(Duration::from_micros(1), ms(100));
        let t0 = Instant::now();
        clock.tick_at(t0);
        clock.tick_at(t0 + ms(50));
        let time = clock.tick_at(t0 + ms(1050));
        // 50 ms + a 1 s stall clamped to 100 ms, plus the first step from construction.
        assert!(time.elapsed >= 0.15 - 1e-4);
        assert!(time.elapsed <= 0.25 + 1e-4);
    }
}
