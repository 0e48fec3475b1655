use super::Vec2;

/// Converts between logical (centered, Y-up) and device (top-left, Y-down) space.
///
/// A mapper is a snapshot of the viewport at the time it was taken; take a new
/// one after the viewport changes. `scale` is 1.0 unless the viewport runs the
/// [`Scale`](super::ResizePolicy::Scale) policy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordMapper {
    half_width: f32,
    half_height: f32,
    scale: f32,
}

impl CoordMapper {
    #[inline]
    pub fn new(device_width: f32, device_height: f32, scale: f32) -> Self {
        Self {
            half_width: device_width * 0.5,
            half_height: device_height * 0.5,
            scale: if scale > 0.0 && scale.is_finite() { scale } else { 1.0 },
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical point to device pixel position.
    #[inline]
    pub fn to_device(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.scale + self.half_width,
            self.half_height - p.y * self.scale,
        )
    }

    /// Device pixel position to logical point. Exact inverse of [`to_device`](Self::to_device).
    #[inline]
    pub fn to_logical(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.half_width) / self.scale,
            (self.half_height - p.y) / self.scale,
        )
    }

    /// Logical length (radius, thickness, explicit size) to device pixels.
    #[inline]
    pub fn to_device_len(&self, len: f32) -> f32 {
        len * self.scale
    }

    #[inline]
    pub fn to_logical_len(&self, len: f32) -> f32 {
        len / self.scale
    }
}
