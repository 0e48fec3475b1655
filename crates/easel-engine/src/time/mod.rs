//! Frame timing.
//!
//! - `FrameClock` measures clamped delta time between ticks
//! - `FrameLimiter` schedules ticks at the configured frame rate

mod frame_clock;
mod limiter;

pub use frame_clock::{FrameClock, FrameTime};
pub use limiter::FrameLimiter;
