use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::App;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::logging::init_logging;
use crate::render::{BatchRenderer, RenderCtx, RenderTarget};
use crate::time::FrameLimiter;

use super::frame::{FrameLoop, StopReason};
use super::AppConfig;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it stops.
    ///
    /// Returns `Ok` when the loop stopped on request (window close, escape,
    /// or [`AppCtx::quit`]) and `Err` when the window or GPU could not be
    /// brought up or the surface failed fatally.
    pub fn run<A>(config: AppConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        init_logging(config.logging.clone());

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RunState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Runs with default GPU preferences and terminates the process:
    /// status 0 after a normal stop, 1 after a fatal error.
    pub fn launch<A>(config: AppConfig, app: A) -> !
    where
        A: App + 'static,
    {
        match Self::run(config, GpuInit::default(), app) {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                log::error!("{e:#}");
                std::process::exit(1)
            }
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RunState<A>
where
    A: App + 'static,
{
    config: AppConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    frames: FrameLoop,
    renderer: BatchRenderer,
    limiter: FrameLimiter,

    error: Option<anyhow::Error>,
}

impl<A> RunState<A>
where
    A: App + 'static,
{
    fn new(config: AppConfig, gpu_init: GpuInit, app: A) -> Self {
        let frames = FrameLoop::new(&config);
        let limiter = FrameLimiter::new(config.fps);

        Self {
            config,
            gpu_init,
            app,
            entry: None,
            frames,
            renderer: BatchRenderer::new(),
            limiter,
            error: None,
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop, reason: StopReason) {
        if self.frames.stop(reason) {
            log::info!("stopping: {}", reason.describe());
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error.get_or_insert(error);
        self.stop(event_loop, StopReason::Failed);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let viewport = &self.frames.viewport;
        let (width, height) = viewport.size();
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(viewport.policy().is_resizable());

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }

    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let step = self.frames.resize((size.width, size.height));
        let mut surface = step.surface;
        if let Some((w, h)) = step.request {
            let applied = entry.with_window(|win| win.request_inner_size(PhysicalSize::new(w, h)));
            // `Some` means the platform applied it already and sends no echo.
            if let Some(applied) = applied {
                surface = self.frames.window_adopted((applied.width, applied.height));
            }
        }

        entry.with_gpu_mut(|gpu| gpu.resize(PhysicalSize::new(surface.0, surface.1)));
        entry.with_window(|win| win.request_redraw());
    }

    /// Renders the current draw list to the window.
    fn present(&mut self) -> Option<SurfaceErrorAction> {
        let entry = self.entry.as_mut()?;
        let list = self.frames.canvas.draw_list();
        let renderer = &mut self.renderer;

        entry.with_mut(|fields| {
            let gpu = fields.gpu;
            if !gpu.is_drawable() {
                return None;
            }

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(e) => return Some(gpu.handle_surface_error(e)),
            };

            {
                let ctx = RenderCtx::for_gpu(gpu);
                let mut target = RenderTarget::for_frame(&mut frame);
                renderer.render(&ctx, &mut target, list);
            }

            fields.window.pre_present_notify();
            gpu.submit(frame);
            None
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        // Redraws requested by the platform between ticks re-present the last frame.
        if self.limiter.is_due(now) {
            self.limiter.tick(now);
            if let Some(reason) = self.frames.tick(&mut self.app, now) {
                self.stop(event_loop, reason);
                return;
            }
        }

        match self.present() {
            None | Some(SurfaceErrorAction::Reconfigured) | Some(SurfaceErrorAction::SkipFrame) => {}
            Some(SurfaceErrorAction::Fatal) => {
                self.fail(event_loop, anyhow::anyhow!("surface lost and could not be recovered"));
            }
        }
    }
}

impl<A> ApplicationHandler for RunState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.frames.stopped().is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => self.entry = Some(entry),
            Err(e) => {
                self.fail(event_loop, e.context("failed to open the window"));
                return;
            }
        }

        let (w, h) = self.frames.viewport.size();
        let policy = self.frames.viewport.policy();
        log::info!("window open: {w}x{h}, {policy:?}, {} fps", self.config.fps);

        if let Some(reason) = self.frames.initialize(&mut self.app, Instant::now()) {
            log::debug!("stopped during initialize");
            self.stop(event_loop, reason);
            return;
        }

        self.limiter = FrameLimiter::new(self.config.fps);
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(entry) = &self.entry {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frames.stopped().is_some() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.deadline()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.frames.stopped().is_some() {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_window_event(&self.frames.input, &event) {
            self.frames.input.apply_event(&ev);
        }

        match event {
            WindowEvent::CloseRequested => self.stop(event_loop, StopReason::WindowClosed),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::debug!(
            "releasing window; cached: {} fonts, {} text lines, {} textures",
            self.frames.canvas.font_cache().len(),
            self.frames.canvas.text_cache().len(),
            self.renderer.resident_textures()
        );
        self.entry = None;
    }
}
