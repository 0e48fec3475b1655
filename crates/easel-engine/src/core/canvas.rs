use std::path::PathBuf;

use crate::assets::Image;
use crate::coords::{Align, CoordMapper, Rect, Vec2, Viewport};
use crate::input::{InputSnapshot, InputState, Key, MouseButton};
use crate::paint::Color;
use crate::scene::{DrawList, ShapeStyle};
use crate::text::{place_lines, wrap_lines, FontCache, TextCache, TextStyle};

/// How [`Canvas::draw_image`] sizes and anchors an image.
///
/// With only one of `width`/`height` set the other follows the image's
/// aspect ratio; with neither the natural size is used.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub align: Align,
    /// Smooth (triangle) resampling instead of nearest-neighbor.
    pub antialias: bool,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }
}

/// Drawing surface handed to [`App::draw`](super::App::draw).
///
/// All positions and lengths are logical: origin at the window center, +Y up.
/// The canvas maps them to device pixels and records them in paint order.
/// It also owns the font and rendered-text caches, which live as long as the
/// application.
pub struct Canvas {
    list: DrawList,
    fonts: FontCache,
    text: TextCache,
    input: InputSnapshot,
    mapper: CoordMapper,
    size: (u32, u32),
    warned_no_font: bool,
}

impl Canvas {
    /// `default_font` overrides the probe of well-known system font paths.
    pub fn new(default_font: Option<PathBuf>) -> Self {
        Self {
            list: DrawList::new(),
            fonts: FontCache::new(default_font),
            text: TextCache::new(),
            input: InputSnapshot::new(),
            mapper: CoordMapper::new(1.0, 1.0, 1.0),
            size: (1, 1),
            warned_no_font: false,
        }
    }

    /// Starts a tick: takes the input snapshot and resets the draw list.
    pub(crate) fn begin_frame(&mut self, viewport: &Viewport, live: &InputState) {
        self.mapper = viewport.mapper();
        self.size = viewport.size();
        self.input.advance(live, &self.mapper);
        self.list.clear(Color::BLACK);
    }

    pub(crate) fn draw_list(&self) -> &DrawList {
        &self.list
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn mapper(&self) -> &CoordMapper {
        &self.mapper
    }

    /// Window size in device pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.mapper.scale()
    }

    pub fn font_cache(&self) -> &FontCache {
        &self.fonts
    }

    pub fn text_cache(&self) -> &TextCache {
        &self.text
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    #[inline]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }

    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.input.mouse_position()
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.input.is_mouse_down(button)
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Fills the whole frame, covering everything drawn so far.
    pub fn clear(&mut self, color: impl Into<Color>) {
        self.list.clear(color.into());
    }

    /// Rectangle spanned by two opposite corners, in any order.
    pub fn fill_rect(&mut self, a: impl Into<Vec2>, b: impl Into<Vec2>, color: impl Into<Color>) {
        let rect = self.device_rect(a.into(), b.into());
        self.list.push_rect(rect, color.into(), ShapeStyle::Fill);
    }

    /// Rectangle outline; the stroke grows inward from the corners given.
    pub fn stroke_rect(
        &mut self,
        a: impl Into<Vec2>,
        b: impl Into<Vec2>,
        color: impl Into<Color>,
        thickness: f32,
    ) {
        let rect = self.device_rect(a.into(), b.into());
        let style = ShapeStyle::Stroke(self.mapper.to_device_len(thickness));
        self.list.push_rect(rect, color.into(), style);
    }

    pub fn fill_triangle(
        &mut self,
        a: impl Into<Vec2>,
        b: impl Into<Vec2>,
        c: impl Into<Vec2>,
        color: impl Into<Color>,
    ) {
        let points = [a.into(), b.into(), c.into()].map(|p| self.mapper.to_device(p));
        self.list.push_triangle(points, color.into(), ShapeStyle::Fill);
    }

    pub fn stroke_triangle(
        &mut self,
        a: impl Into<Vec2>,
        b: impl Into<Vec2>,
        c: impl Into<Vec2>,
        color: impl Into<Color>,
        thickness: f32,
    ) {
        let points = [a.into(), b.into(), c.into()].map(|p| self.mapper.to_device(p));
        let style = ShapeStyle::Stroke(self.mapper.to_device_len(thickness));
        self.list.push_triangle(points, color.into(), style);
    }

    pub fn line(
        &mut self,
        from: impl Into<Vec2>,
        to: impl Into<Vec2>,
        color: impl Into<Color>,
        thickness: f32,
    ) {
        let from = self.mapper.to_device(from.into());
        let to = self.mapper.to_device(to.into());
        self.list.push_line(from, to, color.into(), self.mapper.to_device_len(thickness));
    }

    pub fn fill_circle(&mut self, center: impl Into<Vec2>, radius: f32, color: impl Into<Color>) {
        let center = self.mapper.to_device(center.into());
        let r = self.mapper.to_device_len(radius);
        self.list.push_circle(center, r, color.into(), ShapeStyle::Fill);
    }

    /// Circle outline; the stroke grows inward from `radius`.
    pub fn stroke_circle(
        &mut self,
        center: impl Into<Vec2>,
        radius: f32,
        color: impl Into<Color>,
        thickness: f32,
    ) {
        let center = self.mapper.to_device(center.into());
        let r = self.mapper.to_device_len(radius);
        let style = ShapeStyle::Stroke(self.mapper.to_device_len(thickness));
        self.list.push_circle(center, r, color.into(), style);
    }

    /// Ellipse centered on `center` with the given full width and height.
    pub fn fill_ellipse(
        &mut self,
        center: impl Into<Vec2>,
        width: f32,
        height: f32,
        color: impl Into<Color>,
    ) {
        let center = self.mapper.to_device(center.into());
        let radii = self.device_radii(width, height);
        self.list.push_ellipse(center, radii, color.into(), ShapeStyle::Fill);
    }

    pub fn stroke_ellipse(
        &mut self,
        center: impl Into<Vec2>,
        width: f32,
        height: f32,
        color: impl Into<Color>,
        thickness: f32,
    ) {
        let center = self.mapper.to_device(center.into());
        let radii = self.device_radii(width, height);
        let style = ShapeStyle::Stroke(self.mapper.to_device_len(thickness));
        self.list.push_ellipse(center, radii, color.into(), style);
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Draws `image` anchored at `pos` according to `opts.align`.
    ///
    /// The resized bitmap comes from the image's own cache, so drawing the
    /// same image at the same size every frame resamples once.
    pub fn draw_image(&mut self, image: &Image, pos: impl Into<Vec2>, opts: ImageOptions) {
        let (w, h) = image.fit_size(opts.width, opts.height);
        let scale = self.mapper.scale();
        let dw = ((w * scale) as u32).max(1);
        let dh = ((h * scale) as u32).max(1);

        let bitmap = image.get_scaled(dw, dh, opts.antialias);
        let anchor = self.mapper.to_device(pos.into());
        let top_left = opts.align.place(anchor, Vec2::new(dw as f32, dh as f32));
        self.list.push_bitmap(bitmap, snap(top_left));
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Draws `text` anchored at `pos`.
    ///
    /// Lines break at `\n` and, with a wrap width, between words. The block
    /// is anchored as a whole and each line is aligned inside it by the
    /// anchor's horizontal component. Under the scale policy the font size,
    /// line height and wrap width all scale with the content.
    pub fn draw_text(&mut self, pos: impl Into<Vec2>, text: &str, style: &TextStyle) {
        let key = style.font.key(self.mapper.scale());
        let Some(font) = self.fonts.resolve(&key) else {
            if !self.warned_no_font {
                log::warn!("no usable font; skipping text");
                self.warned_no_font = true;
            }
            return;
        };

        let wrap = style.wrap_width.map(|w| self.mapper.to_device_len(w));
        let lines = wrap_lines(text, wrap, |s| font.measure(s));
        let line_height = match style.line_spacing {
            Some(multiple) => font.px() * multiple,
            None => font.line_advance(),
        };

        let bitmaps = self.text.render(&font, &lines, style.color);
        let widths: Vec<f32> = bitmaps.iter().map(|b| b.width() as f32).collect();
        let origin = self.mapper.to_device(pos.into());

        for (bitmap, top_left) in bitmaps.into_iter().zip(place_lines(&widths, origin, style.align, line_height)) {
            self.list.push_bitmap(bitmap, snap(top_left));
        }
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn device_rect(&self, a: Vec2, b: Vec2) -> Rect {
        Rect::from_corners(self.mapper.to_device(a), self.mapper.to_device(b))
    }

    fn device_radii(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            self.mapper.to_device_len(width) * 0.5,
            self.mapper.to_device_len(height) * 0.5,
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Whole-pixel position so bitmap texels land on device pixels.
#[inline]
fn snap(p: Vec2) -> Vec2 {
    Vec2::new(p.x.floor(), p.y.floor())
}
