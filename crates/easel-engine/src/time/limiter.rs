use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler.
///
/// Hands out the instant the next frame is due. Deadlines advance by one
/// period per tick so the average rate holds even when individual waits
/// overshoot; if the loop falls more than a full period behind, the schedule
/// re-anchors to the current time instead of firing a burst of late frames.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    next: Instant,
}

impl FrameLimiter {
    /// `fps` of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Records a tick taken at `now` and schedules the following one.
    pub fn tick(&mut self, now: Instant) {
        self.next += self.period;
        // Over a period behind: re-anchor. Anything less stays on the grid and is already due.
        if self.next + self.period < now {
            self.next = now + self.period;
        }
    }
}
