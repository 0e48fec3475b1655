use crate::device::{Gpu, GpuFrame};

/// What a renderer needs from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Drawable size in device pixels.
    pub size: (u32, u32),
}

impl<'a> RenderCtx<'a> {
    pub fn for_gpu(gpu: &'a Gpu<'_>) -> Self {
        let size = gpu.size();
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            size: (size.width, size.height),
        }
    }
}

/// Where a renderer records: the frame's encoder and swapchain view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn for_frame(frame: &'a mut GpuFrame) -> Self {
        Self { encoder: &mut frame.encoder, color_view: &frame.view }
    }
}
