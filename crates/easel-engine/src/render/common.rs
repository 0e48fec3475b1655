//! GPU-side constants and uniforms for the batch pipeline.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Tessellated colors and uploaded textures are premultiplied, so source
/// alpha is already folded into the color channels.
pub(super) const PREMULTIPLIED_OVER: wgpu::BlendState = wgpu::BlendState {
    color: OVER,
    alpha: OVER,
};

const OVER: wgpu::BlendComponent = wgpu::BlendComponent {
    src_factor: wgpu::BlendFactor::One,
    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
    operation: wgpu::BlendOperation::Add,
};

/// Surface size in device pixels, read by the vertex shader to reach NDC.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    size: [f32; 2],
    // uniform buffers want 16-byte blocks
    _pad: [f32; 2],
}

impl ViewportUniform {
    pub(super) const BINDING_SIZE: Option<NonZeroU64> =
        NonZeroU64::new(std::mem::size_of::<Self>() as u64);

    pub(super) fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _pad: [0.0; 2],
        }
    }
}

/// `LoadOp::Clear` takes linear components.
pub(super) fn clear_value(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear_premul().map(f64::from);
    wgpu::Color { r, g, b, a }
}
