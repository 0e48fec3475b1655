use super::canvas::Canvas;
use super::ctx::AppCtx;

/// Application contract driven by the runtime's frame loop.
///
/// Each tick calls `update` and then `draw`. `initialize` runs once, after
/// the window and GPU exist and before the first tick.
pub trait App {
    fn initialize(&mut self, ctx: &mut AppCtx<'_>) {
        let _ = ctx;
    }

    /// Advances application state. Called once per tick, before `draw`.
    fn update(&mut self, ctx: &mut AppCtx<'_>) {
        let _ = ctx;
    }

    /// Records the frame. The canvas starts each tick cleared to black.
    fn draw(&mut self, canvas: &mut Canvas);
}
