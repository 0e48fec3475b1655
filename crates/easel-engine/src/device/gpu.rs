use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{SurfaceErrorAction, Swapchain};
use super::GpuInit;

/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back to [`Gpu::submit`] promptly: while it is alive the next
/// frame cannot be acquired.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Device, queue and swapchain for the window.
///
/// The surface borrows the window, hence the lifetime; the runtime keeps
/// both in one self-referencing entry.
pub struct Gpu<'w> {
    // Keep instance and adapter alive for the surface.
    _instance: wgpu::Instance,
    _adapter: wgpu::Adapter,

    device: wgpu::Device,
    queue: wgpu::Queue,
    swapchain: Swapchain<'w>,
}

impl<'w> Gpu<'w> {
    /// Creates the GPU context for `window`. Adapter and device requests are
    /// asynchronous in wgpu; the runtime blocks on this once at startup.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("easel device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let swapchain = Swapchain::new(surface, &adapter, &device, &init, size)?;

        let info = adapter.get_info();
        log::info!(
            "gpu ready: {} ({:?}), {:?} {:?}, {}x{}",
            info.name,
            info.backend,
            swapchain.format(),
            swapchain.present_mode(),
            size.width,
            size.height
        );

        Ok(Self {
            _instance: instance,
            _adapter: adapter,
            device,
            queue,
            swapchain,
        })
    }

    #[inline]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.swapchain.format()
    }

    /// Drawable size in physical pixels.
    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.swapchain.size()
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// False while the window is minimized to a zero-size drawable.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.swapchain.is_drawable()
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.swapchain.resize(&self.device, size);
    }

    /// Acquires the next swapchain image and a fresh encoder.
    pub fn begin_frame(&self) -> Result<GpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.swapchain.acquire()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("easel frame encoder"),
            });

        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the recorded commands and presents the frame.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Decides how to continue after [`begin_frame`](Self::begin_frame) failed.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        self.swapchain.recover(&self.device, err)
    }
}
