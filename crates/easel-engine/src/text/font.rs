use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::RgbaImage;

use crate::paint::Color;

use super::raster;

/// Well-known locations probed, in order, for the default face.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Error produced while reading or parsing a font file.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Which font a draw call asks for.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum FontSpec {
    /// The platform default face at the given point size.
    Default(u32),
    /// The face in the given file at the given point size.
    Path(PathBuf, u32),
}

impl FontSpec {
    #[inline]
    pub fn size(&self) -> u32 {
        match self {
            FontSpec::Default(size) | FontSpec::Path(_, size) => *size,
        }
    }

    #[inline]
    pub fn with_size(self, size: u32) -> Self {
        match self {
            FontSpec::Default(_) => FontSpec::Default(size),
            FontSpec::Path(p, _) => FontSpec::Path(p, size),
        }
    }

    /// Cache key at the given content scale (size rounded, never below 1).
    pub fn key(&self, scale: f32) -> FontKey {
        let size = ((self.size() as f32 * scale).round() as u32).max(1);
        match self {
            FontSpec::Default(_) => FontKey { path: None, size },
            FontSpec::Path(p, _) => FontKey { path: Some(p.clone()), size },
        }
    }
}

/// `(path or default, point size)`: identity of a resolved font.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FontKey {
    pub path: Option<PathBuf>,
    pub size: u32,
}

/// A face bound to a size. Cheap to clone.
#[derive(Clone)]
pub struct FontHandle {
    key: FontKey,
    face: Rc<fontdue::Font>,
}

impl FontHandle {
    #[inline]
    pub fn key(&self) -> &FontKey {
        &self.key
    }

    /// Pixel size glyphs are rasterized at.
    #[inline]
    pub fn px(&self) -> f32 {
        self.key.size as f32
    }

    /// Advance width of a single line, in device pixels.
    pub fn measure(&self, text: &str) -> f32 {
        raster::measure_line(&self.face, self.px(), text)
    }

    /// Distance between consecutive baselines the face recommends.
    pub fn line_advance(&self) -> f32 {
        raster::line_metrics(&self.face, self.px()).advance
    }

    pub(crate) fn rasterize(&self, text: &str, color: Color) -> RgbaImage {
        raster::rasterize_line(&self.face, self.px(), text, color)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle").field("key", &self.key).finish()
    }
}

/// Resolves [`FontKey`]s to handles, parsing each file at most once.
///
/// A path that cannot be read or parsed falls back to the default face at the
/// requested size. When no default face exists either, resolution yields
/// `None` and the caller skips the text.
pub struct FontCache {
    default_path: Option<PathBuf>,
    /// Parsed faces by file; `None` key is the default face. Failures are remembered.
    faces: HashMap<Option<PathBuf>, Option<Rc<fontdue::Font>>>,
    handles: HashMap<FontKey, FontHandle>,
}

impl FontCache {
    /// `default_path` overrides the probe of [`DEFAULT_FONT_PATHS`].
    pub fn new(default_path: Option<PathBuf>) -> Self {
        Self {
            default_path,
            faces: HashMap::new(),
            handles: HashMap::new(),
        }
    }

    /// Number of resolved `(face, size)` handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
        self.faces.clear();
    }

    /// Returns the handle for `key`, resolving it on first use.
    pub fn resolve(&mut self, key: &FontKey) -> Option<FontHandle> {
        if let Some(h) = self.handles.get(key) {
            return Some(h.clone());
        }

        let face = match &key.path {
            Some(path) => match self.face(Some(path)) {
                Some(face) => Some(face),
                None => {
                    log::warn!(
                        "font {} unavailable; using default face at {}pt",
                        path.display(),
                        key.size
                    );
                    self.face(None)
                }
            },
            None => self.face(None),
        }?;

        let handle = FontHandle { key: key.clone(), face };
        self.handles.insert(key.clone(), handle.clone());
        Some(handle)
    }

    fn face(&mut self, path: Option<&Path>) -> Option<Rc<fontdue::Font>> {
        let slot = path.map(Path::to_path_buf);
        if let Some(cached) = self.faces.get(&slot) {
            return cached.clone();
        }

        let loaded = match path {
            Some(p) => load_face(p)
                .map_err(|e| log::warn!("{e}"))
                .ok(),
            None => self.load_default_face(),
        }
        .map(Rc::new);

        self.faces.insert(slot, loaded.clone());
        loaded
    }

    fn load_default_face(&self) -> Option<fontdue::Font> {
        if let Some(p) = &self.default_path {
            match load_face(p) {
                Ok(face) => return Some(face),
                Err(e) => log::warn!("configured default {e}"),
            }
        }

        let found = DEFAULT_FONT_PATHS
            .iter()
            .map(Path::new)
            .find_map(|p| load_face(p).ok().map(|face| (p, face)));

        match found {
            Some((p, face)) => {
                log::debug!("default font: {}", p.display());
                Some(face)
            }
            None => {
                log::warn!("no default font found; text will not be drawn");
                None
            }
        }
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Reads and parses a TrueType/OpenType file.
pub fn load_face(path: &Path) -> Result<fontdue::Font, FontLoadError> {
    let bytes = std::fs::read(path)
        .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── FontSpec ──────────────────────────────────────────────────────────

    #[test]
    fn key_scales_the_size() {
        let spec = FontSpec::Default(24);
        assert_eq!(spec.key(2.0), FontKey { path: None, size: 48 });
        assert_eq!(spec.key(1.0).size, 24);
    }

    #[test]
    fn key_never_reaches_zero() {
        assert_eq!(FontSpec::Default(1).key(0.1).size, 1);
    }

    #[test]
    fn path_spec_keeps_the_path() {
        let key = FontSpec::Path("x.ttf".into(), 10).key(1.5);
        assert_eq!(key.path.as_deref(), Some(Path::new("x.ttf")));
        assert_eq!(key.size, 15);
    }

    // ── FontCache ─────────────────────────────────────────────────────────

    #[test]
    fn load_face_reports_missing_file() {
        let err = load_face(Path::new("missing-font.ttf")).unwrap_err();
        assert!(err.to_string().contains("missing-font.ttf"));
    }

    #[test]
    #[ignore = "needs a system font"]
    fn bad_path_falls_back_to_default_face() {
        let mut cache = FontCache::default();
        let key = FontSpec::Path("no/such/font.ttf".into(), 20).key(1.0);
        let handle = cache.resolve(&key).expect("no system font found");
        assert_eq!(handle.key(), &key);
        assert_eq!(handle.px(), 20.0);
    }

    #[test]
    #[ignore = "needs a system font"]
    fn same_key_shares_one_handle() {
        let mut cache = FontCache::default();
        let key = FontSpec::Default(18).key(1.0);
        let a = cache.resolve(&key).expect("no system font found");
        let b = cache.resolve(&key).expect("no system font found");
        assert!(Rc::ptr_eq(&a.face, &b.face));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    #[ignore = "needs a system font"]
    fn sizes_share_the_parsed_face() {
        let mut cache = FontCache::default();
        let a = cache.resolve(&FontSpec::Default(10).key(1.0)).expect("no system font found");
        let b = cache.resolve(&FontSpec::Default(30).key(1.0)).expect("no system font found");
        assert!(Rc::ptr_eq(&a.face, &b.face));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    #[ignore = "needs a system font"]
    fn bigger_size_measures_wider() {
        let mut cache = FontCache::default();
        let small = cache.resolve(&FontSpec::Default(12).key(1.0)).expect("no system font found");
        let big = cache.resolve(&FontSpec::Default(48).key(1.0)).expect("no system font found");
        assert!(big.measure("hello") > small.measure("hello"));
        assert_eq!(small.measure(""), 0.0);
    }
}
