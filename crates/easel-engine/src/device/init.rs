/// GPU preferences applied when the window's device is created.
///
/// Unsupported choices fall back to something the surface offers, so the
/// defaults are safe everywhere.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one is offered. Vertex colors are
    /// linearized on the CPU and textures sample as sRGB, so a linear
    /// surface renders too dark.
    pub prefer_srgb: bool,

    /// FIFO paces to the display; the frame limiter sets the tick rate.
    pub present_mode: wgpu::PresentMode,

    /// `None` takes the first mode the surface lists.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    /// Hint only; honored where the backend supports it.
    pub desired_maximum_frame_latency: u32,

    /// Limits requested from the device. The renderer reads
    /// `max_texture_dimension_2d` to skip bitmaps it cannot upload.
    pub required_limits: wgpu::Limits,
}

impl GpuInit {
    /// Prefers an integrated adapter, e.g. on laptops.
    pub fn low_power(mut self) -> Self {
        self.power_preference = wgpu::PowerPreference::LowPower;
        self
    }

    pub fn present_mode(mut self, mode: wgpu::PresentMode) -> Self {
        self.present_mode = mode;
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            desired_maximum_frame_latency: 2,
            required_limits: wgpu::Limits::default(),
        }
    }
}
