use std::path::PathBuf;

use crate::coords::Align;
use crate::paint::Color;

use super::FontSpec;

/// Point size used when a draw call does not name one.
pub const DEFAULT_FONT_SIZE: u32 = 36;

/// Everything `draw_text` needs besides the position and the string.
///
/// ```rust,ignore
/// let style = TextStyle::new(Color::WHITE)
///     .size(24)
///     .align(Align::Center)
///     .wrap_width(300.0);
/// canvas.draw_text((0.0, 0.0), "hello", &style);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub align: Align,
    pub font: FontSpec,
    /// Line height as a multiple of the font size. `None` uses the font's own line advance.
    pub line_spacing: Option<f32>,
    /// Wrap budget in logical pixels. `None` breaks only on `\n`.
    pub wrap_width: Option<f32>,
}

impl TextStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            align: Align::TopLeft,
            font: FontSpec::Default(DEFAULT_FONT_SIZE),
            line_spacing: None,
            wrap_width: None,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets the point size, keeping the current face.
    pub fn size(mut self, size: u32) -> Self {
        self.font = self.font.with_size(size);
        self
    }

    /// Uses the font file at `path`, keeping the current size.
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = FontSpec::Path(path.into(), self.font.size());
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn line_spacing(mut self, multiple: f32) -> Self {
        self.line_spacing = Some(multiple);
        self
    }

    pub fn wrap_width(mut self, width: f32) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
