//! GPU copies of [`Bitmap`]s.

use std::collections::HashMap;

use crate::assets::{Bitmap, BitmapId};

/// Frames a texture may go undrawn before it is released.
pub const TEXTURE_IDLE_FRAMES: u64 = 120;

/// Per-frame usage tracking keyed by bitmap identity.
///
/// Entries touched during a frame survive; entries left untouched for more
/// than `idle_frames` consecutive frames are dropped at [`end_frame`](Self::end_frame).
#[derive(Debug)]
pub struct FrameCache<T> {
    entries: HashMap<BitmapId, (T, u64)>,
    frame: u64,
    idle_frames: u64,
}

impl<T> FrameCache<T> {
    pub fn new(idle_frames: u64) -> Self {
        Self { entries: HashMap::new(), frame: 0, idle_frames }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Marks `id` as used this frame, creating its value on first use.
    pub fn touch_or_insert_with(&mut self, id: BitmapId, create: impl FnOnce() -> T) -> &T {
        let frame = self.frame;
        let slot = self.entries.entry(id).or_insert_with(|| (create(), frame));
        slot.1 = frame;
        &slot.0
    }

    pub fn get(&self, id: BitmapId) -> Option<&T> {
        self.entries.get(&id).map(|(value, _)| value)
    }

    /// Closes the frame and drops idle entries. Returns how many were dropped.
    pub fn end_frame(&mut self) -> usize {
        let (frame, idle) = (self.frame, self.idle_frames);
        let before = self.entries.len();
        self.entries.retain(|_, (_, last)| frame - *last <= idle);
        self.frame += 1;
        before - self.entries.len()
    }
}

/// A sampled texture plus the bind group that exposes it to the shader.
pub(crate) struct GpuTexture {
    _texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    /// Uploads straight-alpha RGBA8 pixels as an sRGB texture.
    pub(crate) fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Self {
        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("easel bitmap texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel bitmap bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self { _texture: texture, bind_group }
    }

    pub(crate) fn from_bitmap(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        bitmap: &Bitmap,
    ) -> Self {
        let (w, h) = bitmap.size();
        Self::upload(device, queue, layout, sampler, w, h, bitmap.pixels().as_raw())
    }
}

#[cfg(test)]
mod tests {
    use ::image::RgbaImage;

    use super::*;

    fn id() -> BitmapId {
        Bitmap::new(RgbaImage::new(1, 1)).id()
    }

    #[test]
    fn creates_once_per_id() {
        let mut cache = FrameCache::new(10);
        let a = id();
        let mut created = 0;
        for _ in 0..3 {
            cache.touch_or_insert_with(a, || {
                created += 1;
                "tex"
            });
        }
        assert_eq!(created, 1);
        assert_eq!(cache.get(a), Some(&"tex"));
    }

    #[test]
    fn idle_entries_are_dropped() {
        let mut cache = FrameCache::new(2);
        let (a, b) = (id(), id());
        cache.touch_or_insert_with(a, || 1);
        cache.touch_or_insert_with(b, || 2);
        assert_eq!(cache.end_frame(), 0);

        // Only `b` keeps being drawn.
        for _ in 0..2 {
            cache.touch_or_insert_with(b, || 2);
            assert_eq!(cache.end_frame(), 0);
        }
        cache.touch_or_insert_with(b, || 2);
        assert_eq!(cache.end_frame(), 1);
        assert!(cache.get(a).is_none());
        assert!(cache.get(b).is_some());
    }

    #[test]
    fn dropped_entry_is_recreated_on_next_use() {
        let mut cache = FrameCache::new(0);
        let a = id();
        cache.touch_or_insert_with(a, || 1);
        cache.end_frame();
        cache.end_frame();
        assert!(cache.is_empty());
        assert_eq!(*cache.touch_or_insert_with(a, || 7), 7);
    }
}
