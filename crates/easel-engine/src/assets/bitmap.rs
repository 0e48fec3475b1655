use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Bitmap`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BitmapId(u64);

/// Immutable, reference-counted straight-alpha RGBA8 pixels.
///
/// Cloning is cheap and preserves identity: caches hand out clones and callers
/// can compare them with [`Bitmap::ptr_eq`].
#[derive(Clone)]
pub struct Bitmap {
    inner: Arc<Inner>,
}

struct Inner {
    id: BitmapId,
    pixels: RgbaImage,
}

impl Bitmap {
    pub fn new(pixels: RgbaImage) -> Self {
        let id = BitmapId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        Self { inner: Arc::new(Inner { id, pixels }) }
    }

    #[inline]
    pub fn id(&self) -> BitmapId {
        self.inner.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.pixels.height()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.inner.pixels.dimensions()
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.inner.pixels
    }

    /// True when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Bitmap, b: &Bitmap) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("id", &self.inner.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
