use std::collections::HashMap;

use crate::assets::Bitmap;
use crate::paint::Color;

use super::{FontHandle, FontKey};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct LineKey {
    text: String,
    color: Color,
    font: FontKey,
}

/// Rendered text lines keyed by `(text, color, font)`.
///
/// Drawing the same string every frame rasterizes it once. Entries live until
/// [`clear`](Self::clear) is called.
#[derive(Default)]
pub struct TextCache {
    lines: HashMap<LineKey, Bitmap>,
}

impl TextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Bitmap for one line of `text` in `font` and `color`.
    pub fn render_line(&mut self, font: &FontHandle, text: &str, color: Color) -> Bitmap {
        let key = LineKey {
            text: text.to_string(),
            color,
            font: font.key().clone(),
        };
        self.lines
            .entry(key)
            .or_insert_with(|| Bitmap::new(font.rasterize(text, color)))
            .clone()
    }

    /// Bitmaps for each of `lines`, in order.
    pub fn render<S: AsRef<str>>(&mut self, font: &FontHandle, lines: &[S], color: Color) -> Vec<Bitmap> {
        lines
            .iter()
            .map(|line| self.render_line(font, line.as_ref(), color))
            .collect()
    }
}
