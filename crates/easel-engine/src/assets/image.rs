use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ::image::imageops::{self, FilterType};
use ::image::{Rgba, RgbaImage};

use super::Bitmap;

/// Edge length of the bitmap substituted for images that fail to decode.
pub const PLACEHOLDER_SIZE: u32 = 32;

/// Error returned by [`Image::try_load`].
#[derive(Debug, Clone)]
pub struct ImageLoadError {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image load error: {}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for ImageLoadError {}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct ScaleKey {
    width: u32,
    height: u32,
    antialias: bool,
}

/// A decoded picture plus every resized variant drawn so far.
///
/// Variants are produced on first request and kept for the lifetime of the
/// image; nothing is evicted. The cache uses interior mutability so images can
/// be drawn through a shared reference.
pub struct Image {
    bitmap: Bitmap,
    scaled: RefCell<HashMap<ScaleKey, Bitmap>>,
}

impl Image {
    /// Decodes `path`, substituting a placeholder when decoding fails.
    ///
    /// Rendering should never stop over a missing asset, so the failure is
    /// logged and a red 32×32 square with a black cross is returned instead.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("{e}; using placeholder");
                Self::placeholder()
            }
        }
    }

    /// Decodes `path`, reporting failures to the caller.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ImageLoadError> {
        let path = path.as_ref();
        let decoded = ::image::open(path).map_err(|e| ImageLoadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let pixels = decoded.to_rgba8();
        log::debug!(
            "loaded image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self::from_rgba(pixels))
    }

    /// Wraps already-decoded straight-alpha pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self::from_bitmap(Bitmap::new(pixels))
    }

    pub fn from_bitmap(bitmap: Bitmap) -> Self {
        Self { bitmap, scaled: RefCell::new(HashMap::new()) }
    }

    /// The "missing art" bitmap: a red square crossed by two black diagonals.
    pub fn placeholder() -> Self {
        let n = PLACEHOLDER_SIZE;
        let red = Rgba([255, 0, 0, 255]);
        let black = Rgba([0, 0, 0, 255]);
        let pixels = RgbaImage::from_fn(n, n, |x, y| {
            let on_main = x == y || x == y + 1;
            let on_anti = x + y == n - 1 || x + y == n;
            if on_main || on_anti { black } else { red }
        });
        Self::from_rgba(pixels)
    }

    /// Natural (decoded) width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Natural (decoded) height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// The bitmap at natural size.
    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Number of resized variants produced so far.
    pub fn cached_variants(&self) -> usize {
        self.scaled.borrow().len()
    }

    /// Resolves an optional explicit size against the natural size.
    ///
    /// With one side given, the other follows the natural aspect ratio
    /// (truncated to whole units); with neither, the natural size is used.
    pub fn fit_size(&self, width: Option<f32>, height: Option<f32>) -> (f32, f32) {
        let (nw, nh) = (self.width() as f32, self.height() as f32);
        match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, (nh * (w / nw)).trunc()),
            (None, Some(h)) => ((nw * (h / nh)).trunc(), h),
            (None, None) => (nw, nh),
        }
    }

    /// Returns the image resampled to `width`×`height`.
    ///
    /// `antialias` selects smooth (triangle) filtering over nearest-neighbor.
    /// The first request for a given `(width, height, antialias)` resamples and
    /// stores the result; later requests return the same bitmap. The natural
    /// size returns the original bitmap. Zero dimensions are clamped to 1.
    pub fn get_scaled(&self, width: u32, height: u32, antialias: bool) -> Bitmap {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == self.bitmap.size() {
            return self.bitmap.clone();
        }

        let key = ScaleKey { width, height, antialias };
        self.scaled
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| {
                let filter = if antialias { FilterType::Triangle } else { FilterType::Nearest };
                Bitmap::new(imageops::resize(self.bitmap.pixels(), width, height, filter))
            })
            .clone()
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("bitmap", &self.bitmap)
            .field("cached_variants", &self.cached_variants())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> Image {
        Image::from_rgba(RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 { Rgba([255, 255, 255, 255]) } else { Rgba([0, 0, 0, 255]) }
        }))
    }

    // ── load ──────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_yields_placeholder() {
        let img = Image::load("definitely/not/here.png");
        assert_eq!((img.width(), img.height()), (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
        let px = img.bitmap().pixels();
        assert_eq!(px.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(px.get_pixel(31, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(px.get_pixel(16, 2), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn try_load_reports_the_path() {
        let err = Image::try_load("nope.png").unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn decodes_a_real_png() {
        let path = std::env::temp_dir().join(format!("easel-image-{}.png", std::process::id()));
        checker(3, 5).bitmap().pixels().save(&path).unwrap();
        let img = Image::try_load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((img.width(), img.height()), (3, 5));
    }

    // ── get_scaled ────────────────────────────────────────────────────────

    #[test]
    fn same_key_returns_same_bitmap() {
        let img = checker(8, 8);
        let a = img.get_scaled(16, 4, false);
        let b = img.get_scaled(16, 4, false);
        assert!(Bitmap::ptr_eq(&a, &b));
        assert_eq!(img.cached_variants(), 1);
    }

    #[test]
    fn antialias_flag_is_part_of_the_key() {
        let img = checker(8, 8);
        let nearest = img.get_scaled(5, 5, false);
        let smooth = img.get_scaled(5, 5, true);
        assert!(!Bitmap::ptr_eq(&nearest, &smooth));
        assert_eq!(img.cached_variants(), 2);
    }

    #[test]
    fn nearest_keeps_only_source_colors() {
        let img = checker(4, 4);
        let up = img.get_scaled(12, 12, false);
        assert!(up.pixels().pixels().all(|p| p.0 == [255; 4] || p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn natural_size_returns_original() {
        let img = checker(6, 3);
        assert!(Bitmap::ptr_eq(&img.get_scaled(6, 3, true), img.bitmap()));
        assert_eq!(img.cached_variants(), 0);
    }

    #[test]
    fn zero_size_is_clamped() {
        let img = checker(6, 3);
        assert_eq!(img.get_scaled(0, 0, false).size(), (1, 1));
    }

    // ── fit_size ──────────────────────────────────────────────────────────

    #[test]
    fn fit_size_follows_natural_aspect() {
        let img = checker(200, 100);
        assert_eq!(img.fit_size(None, None), (200.0, 100.0));
        assert_eq!(img.fit_size(Some(50.0), None), (50.0, 25.0));
        assert_eq!(img.fit_size(None, Some(30.0)), (60.0, 30.0));
        assert_eq!(img.fit_size(Some(7.0), Some(9.0)), (7.0, 9.0));
    }

    #[test]
    fn fit_size_truncates_derived_side() {
        let img = checker(3, 2);
        // 2 * (5 / 3) = 3.33…
        assert_eq!(img.fit_size(Some(5.0), None), (5.0, 3.0));
    }
}
