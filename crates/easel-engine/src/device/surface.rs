use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use super::GpuInit;

/// What the runtime should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next frame may draw normally.
    Reconfigured,
    /// Transient failure; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); stop the loop.
    Fatal,
}

/// The window's swapchain: surface plus its active configuration.
pub(crate) struct Swapchain<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    /// Last size reported by the window; may be zero while minimized.
    size: PhysicalSize<u32>,
}

impl<'w> Swapchain<'w> {
    /// Picks format and modes from the adapter's capabilities and configures the surface.
    pub(crate) fn new(
        surface: wgpu::Surface<'w>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        init: &GpuInit,
        size: PhysicalSize<u32>,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(adapter);
        let format = choose_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: choose_present_mode(&caps.present_modes, init.present_mode),
            alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(device, &config);

        Ok(Self { surface, config, size })
    }

    #[inline]
    pub(crate) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub(crate) fn present_mode(&self) -> wgpu::PresentMode {
        self.config.present_mode
    }

    #[inline]
    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    #[inline]
    pub(crate) fn is_drawable(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    /// Tracks a new window size. A zero size (minimized) keeps the last
    /// valid configuration until the window comes back.
    pub(crate) fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        self.size = size;
        if !self.is_drawable() {
            return;
        }
        if (self.config.width, self.config.height) == (size.width, size.height) {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(device, &self.config);
    }

    pub(crate) fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Reconfigures when the surface can be recovered.
    pub(crate) fn recover(&self, device: &wgpu::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = classify(&err);
        match action {
            SurfaceErrorAction::Reconfigured => {
                log::debug!("surface {err:?}; reconfiguring at {}x{}", self.size.width, self.size.height);
                if self.is_drawable() {
                    self.surface.configure(device, &self.config);
                }
            }
            SurfaceErrorAction::SkipFrame => log::debug!("surface {err:?}; skipping frame"),
            SurfaceErrorAction::Fatal => log::error!("surface {err:?}"),
        }
        action
    }
}

fn classify(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// First sRGB 8-bit format when preferred, else whatever the surface lists first.
pub(crate) fn choose_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    const SRGB: [wgpu::TextureFormat; 2] = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];

    prefer_srgb
        .then(|| SRGB.into_iter().find(|f| formats.contains(f)))
        .flatten()
        .or_else(|| formats.first().copied())
}

/// The requested mode if supported, else FIFO (always available).
pub(crate) fn choose_present_mode(modes: &[wgpu::PresentMode], requested: wgpu::PresentMode) -> wgpu::PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        log::warn!("present mode {requested:?} unsupported; using Fifo");
        wgpu::PresentMode::Fifo
    }
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
