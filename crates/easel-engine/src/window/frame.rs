use std::time::Instant;

use crate::coords::{ResizeOutcome, Viewport};
use crate::core::{App, AppCtx, Canvas};
use crate::input::{InputState, Key};
use crate::time::{FrameClock, FrameTime};

use super::AppConfig;

/// Why the loop left the running state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum StopReason {
    WindowClosed,
    EscapePressed,
    QuitRequested,
    Failed,
}

impl StopReason {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            StopReason::WindowClosed => "window closed",
            StopReason::EscapePressed => "escape pressed",
            StopReason::QuitRequested => "quit requested",
            StopReason::Failed => "fatal error",
        }
    }
}

/// What to do with the window after a platform resize.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct ResizeStep {
    /// Size to configure the drawing surface at; zero while minimized.
    pub surface: (u32, u32),
    /// Size the window should be asked to adopt, if it differs from its report.
    pub request: Option<(u32, u32)>,
}

/// The window-free part of the runtime.
///
/// Holds the viewport, live input, canvas and clock, and the Running/Stopped
/// state they tick under. The runtime feeds it platform events and presents
/// whatever the canvas recorded.
pub(crate) struct FrameLoop {
    pub(crate) viewport: Viewport,
    pub(crate) input: InputState,
    pub(crate) canvas: Canvas,
    clock: FrameClock,
    stopped: Option<StopReason>,
}

impl FrameLoop {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            viewport: Viewport::new(config.width, config.height, config.resize),
            input: InputState::default(),
            canvas: Canvas::new(config.default_font.clone()),
            clock: FrameClock::new(),
            stopped: None,
        }
    }

    #[inline]
    pub(crate) fn stopped(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Enters Stopped. Only the first reason is kept; returns whether this
    /// call made the transition.
    pub(crate) fn stop(&mut self, reason: StopReason) -> bool {
        if self.stopped.is_some() {
            return false;
        }
        self.stopped = Some(reason);
        true
    }

    /// Runs `initialize` against an empty input snapshot and restarts the
    /// clock so asset loading does not show up as the first `dt`.
    pub(crate) fn initialize<A: App>(&mut self, app: &mut A, now: Instant) -> Option<StopReason> {
        if self.stopped.is_some() {
            return self.stopped;
        }

        let mut ctx = AppCtx::new(self.canvas.input(), &self.viewport, FrameTime::start(now));
        app.initialize(&mut ctx);
        if ctx.quit_requested() {
            self.stop(StopReason::QuitRequested);
            return self.stopped;
        }

        self.clock.reset();
        None
    }

    /// One tick: snapshot input and clear the canvas, check Escape, `update`,
    /// then `draw`. Returns the stop reason once the loop is stopped; a
    /// stopped loop never calls into the app again.
    pub(crate) fn tick<A: App>(&mut self, app: &mut A, now: Instant) -> Option<StopReason> {
        if self.stopped.is_some() {
            return self.stopped;
        }

        let time = self.clock.tick_at(now);
        self.canvas.begin_frame(&self.viewport, &self.input);

        if self.canvas.is_key_pressed(Key::Escape) {
            self.stop(StopReason::EscapePressed);
            return self.stopped;
        }

        let mut ctx = AppCtx::new(self.canvas.input(), &self.viewport, time);
        app.update(&mut ctx);
        if ctx.quit_requested() {
            self.stop(StopReason::QuitRequested);
            return self.stopped;
        }

        app.draw(&mut self.canvas);
        None
    }

    /// Runs a platform resize through the policy. The surface always follows
    /// the accepted size, never the raw request.
    pub(crate) fn resize(&mut self, requested: (u32, u32)) -> ResizeStep {
        let (w, h) = requested;
        if w == 0 || h == 0 {
            log::debug!("window minimized");
            return ResizeStep { surface: (0, 0), request: None };
        }

        let request = match self.viewport.apply_resize(requested) {
            ResizeOutcome::Ignored => {
                log::debug!("resize to {w}x{h} ignored");
                Some(self.viewport.size()).filter(|&size| size != requested)
            }
            ResizeOutcome::Accepted { size: (aw, ah), adjusted } => {
                log::debug!("resize to {w}x{h} accepted as {aw}x{ah}");
                adjusted.then_some((aw, ah))
            }
        };

        ResizeStep { surface: self.viewport.size(), request }
    }

    /// The window applied a size request on the spot, so no resize event
    /// will echo it. Returns the surface size to use.
    pub(crate) fn window_adopted(&mut self, size: (u32, u32)) -> (u32, u32) {
        self.resize(size).surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ResizePolicy;
    use crate::input::{InputEvent, Modifiers, Press};
    use crate::paint::Color;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        quit_in_initialize: bool,
        quit_in_update: bool,
        /// Per draw: whether the canvas arrived empty and cleared to black.
        fresh_canvas: Vec<bool>,
    }

    impl App for Recorder {
        fn initialize(&mut self, ctx: &mut AppCtx<'_>) {
            self.calls.push("initialize");
            if self.quit_in_initialize {
                ctx.quit();
            }
        }

        fn update(&mut self, ctx: &mut AppCtx<'_>) {
            self.calls.push("update");
            if self.quit_in_update {
                ctx.quit();
            }
        }

        fn draw(&mut self, canvas: &mut Canvas) {
            self.calls.push("draw");
            let list = canvas.draw_list();
            self.fresh_canvas.push(list.is_empty() && list.clear_color() == Color::BLACK);
            canvas.clear(Color::WHITE);
            canvas.fill_rect((-10.0, 10.0), (10.0, -10.0), Color::RED);
        }
    }

    fn frames(policy: ResizePolicy) -> FrameLoop {
        FrameLoop::new(&AppConfig::new("test").size(800, 600).resize(policy))
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, press: Press::Pressed, modifiers: Modifiers::default(), repeat: false }
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn update_then_draw_on_a_cleared_canvas() {
        let mut fl = frames(ResizePolicy::None);
        let mut app = Recorder::default();
        let now = Instant::now();

        assert_eq!(fl.initialize(&mut app, now), None);
        assert_eq!(fl.tick(&mut app, now), None);
        assert_eq!(fl.tick(&mut app, now), None);

        assert_eq!(app.calls, ["initialize", "update", "draw", "update", "draw"]);
        // The second tick starts over even though the first drew on white.
        assert_eq!(app.fresh_canvas, [true, true]);
        assert_eq!(fl.canvas.draw_list().len(), 1);
    }

    #[test]
    fn escape_stops_before_update() {
        let mut fl = frames(ResizePolicy::None);
        let mut app = Recorder::default();
        let now = Instant::now();

        fl.tick(&mut app, now);
        fl.input.apply_event(&press(Key::Escape));
        assert_eq!(fl.tick(&mut app, now), Some(StopReason::EscapePressed));
        assert_eq!(fl.tick(&mut app, now), Some(StopReason::EscapePressed));

        assert_eq!(app.calls, ["update", "draw"]);
    }

    #[test]
    fn other_keys_do_not_stop() {
        let mut fl = frames(ResizePolicy::None);
        let mut app = Recorder::default();
        fl.input.apply_event(&press(Key::A));
        assert_eq!(fl.tick(&mut app, Instant::now()), None);
        assert_eq!(fl.tick(&mut app, Instant::now()), None);
        assert_eq!(fl.stopped(), None);
    }

    #[test]
    fn quit_in_update_skips_draw() {
        let mut fl = frames(ResizePolicy::None);
        let mut app = Recorder { quit_in_update: true, ..Recorder::default() };
        let now = Instant::now();

        assert_eq!(fl.tick(&mut app, now), Some(StopReason::QuitRequested));
        assert_eq!(fl.tick(&mut app, now), Some(StopReason::QuitRequested));
        assert_eq!(app.calls, ["update"]);
    }

    #[test]
    fn quit_in_initialize_means_no_tick() {
        let mut fl = frames(ResizePolicy::None);
        let mut app = Recorder { quit_in_initialize: true, ..Recorder::default() };
        let now = Instant::now();

        assert_eq!(fl.initialize(&mut app, now), Some(StopReason::QuitRequested));
        assert_eq!(fl.tick(&mut app, now), Some(StopReason::QuitRequested));
        assert_eq!(app.calls, ["initialize"]);
    }

    #[test]
    fn first_stop_reason_sticks() {
        let mut fl = frames(ResizePolicy::None);
        assert!(fl.stop(StopReason::WindowClosed));
        assert!(!fl.stop(StopReason::Failed));
        assert_eq!(fl.stopped(), Some(StopReason::WindowClosed));
        assert_eq!(fl.stopped().map(StopReason::describe), Some("window closed"));
    }

    // ── resizing ──────────────────────────────────────────────────────────

    #[test]
    fn surface_follows_the_accepted_size() {
        let mut fl = frames(ResizePolicy::Aspect);
        let step = fl.resize((1000, 700));
        assert_eq!(step, ResizeStep { surface: (933, 700), request: Some((933, 700)) });

        // Renderer projection and mapper centre agree on the same size.
        assert_eq!(fl.viewport.mapper().to_device((0.0, 0.0).into()).x, 466.5);
    }

    #[test]
    fn synchronously_adopted_request_is_final() {
        let mut fl = frames(ResizePolicy::Aspect);
        fl.resize((1000, 700));
        assert_eq!(fl.window_adopted((933, 700)), (933, 700));

        // A late duplicate report of that size leaves it alone as well.
        assert_eq!(fl.resize((933, 700)), ResizeStep { surface: (933, 700), request: None });
    }

    #[test]
    fn fixed_policy_keeps_surface_and_asks_back() {
        let mut fl = frames(ResizePolicy::None);
        let step = fl.resize((400, 300));
        assert_eq!(step, ResizeStep { surface: (800, 600), request: Some((800, 600)) });
    }

    #[test]
    fn free_policy_takes_the_request() {
        let mut fl = frames(ResizePolicy::Both);
        assert_eq!(fl.resize((1024, 300)), ResizeStep { surface: (1024, 300), request: None });
    }

    #[test]
    fn minimize_keeps_the_viewport() {
        let mut fl = frames(ResizePolicy::Scale);
        assert_eq!(fl.resize((0, 0)), ResizeStep { surface: (0, 0), request: None });
        assert_eq!(fl.viewport.size(), (800, 600));
        assert_eq!(fl.viewport.scale(), 1.0);
    }
}
