use crate::coords::{Vec2, Viewport};
use crate::input::{InputSnapshot, Key, MouseButton};
use crate::time::FrameTime;

/// Per-tick context passed to [`App::initialize`](super::App::initialize) and
/// [`App::update`](super::App::update).
pub struct AppCtx<'a> {
    input: &'a InputSnapshot,
    viewport: &'a Viewport,
    time: FrameTime,
    quit: bool,
}

impl<'a> AppCtx<'a> {
    pub(crate) fn new(input: &'a InputSnapshot, viewport: &'a Viewport, time: FrameTime) -> Self {
        Self { input, viewport, time, quit: false }
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn input(&self) -> &InputSnapshot {
        self.input
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    #[inline]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }

    /// Pointer position in logical coordinates.
    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.input.mouse_position()
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.input.is_mouse_down(button)
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Seconds since the previous tick, clamped to [0.1 ms, 250 ms].
    #[inline]
    pub fn dt(&self) -> f32 {
        self.time.dt
    }

    /// Seconds of clamped tick time since the loop started.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.time.elapsed
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.time.frame_index
    }

    // ── viewport ──────────────────────────────────────────────────────────

    /// Window size in device pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.viewport.size()
    }

    /// Content scale: above 1.0 only under [`ResizePolicy::Scale`](crate::coords::ResizePolicy::Scale).
    #[inline]
    pub fn scale(&self) -> f32 {
        self.viewport.scale()
    }

    // ── control ───────────────────────────────────────────────────────────

    /// Stops the frame loop after the current tick.
    pub fn quit(&mut self) {
        self.quit = true;
    }

    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
