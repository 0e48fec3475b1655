//! Single-line layout and rasterization on top of `fontdue`.

use fontdue::Font;
use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle as GlyphRun};
use image::{Rgba, RgbaImage};

use crate::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LineMetrics {
    /// Ascent minus descent: the height of a rendered line bitmap.
    pub height: f32,
    /// Baseline-to-baseline distance (height plus line gap).
    pub advance: f32,
}

pub(crate) fn line_metrics(font: &Font, px: f32) -> LineMetrics {
    match font.horizontal_line_metrics(px) {
        Some(m) => LineMetrics {
            height: m.ascent - m.descent,
            advance: m.new_line_size,
        },
        None => LineMetrics { height: px * 1.2, advance: px * 1.2 },
    }
}

fn layout_line(font: &Font, px: f32, text: &str) -> Vec<GlyphPosition> {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &GlyphRun::new(text, px, 0));
    layout.glyphs().clone()
}

/// Pen position after the last glyph. Advance-based rather than ink-based so
/// trailing spaces count and wrap decisions match what gets drawn.
fn pen_extent(font: &Font, px: f32, glyphs: &[GlyphPosition]) -> f32 {
    glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, px);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max)
}

pub(crate) fn measure_line(font: &Font, px: f32, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    pen_extent(font, px, &layout_line(font, px, text))
}

/// Renders `text` as straight-alpha RGBA: every pixel carries `color`'s RGB
/// and glyph coverage scales its alpha. Empty text yields a 1-pixel-wide
/// transparent strip of full line height so it still occupies a line.
pub(crate) fn rasterize_line(font: &Font, px: f32, text: &str, color: Color) -> RgbaImage {
    let metrics = line_metrics(font, px);
    let glyphs = if text.is_empty() { Vec::new() } else { layout_line(font, px, text) };

    let ink = glyphs
        .iter()
        .map(|g| g.x + g.width as f32)
        .fold(0.0f32, f32::max);
    let width = pen_extent(font, px, &glyphs).max(ink).ceil().max(1.0) as u32;
    let height = metrics.height.ceil().max(1.0) as u32;

    let [r, g, b, a] = color.to_array();
    let mut out = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 0]));

    for glyph in glyphs.iter().filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0) {
        let (gm, coverage) = font.rasterize_config(glyph.key);
        let ox = glyph.x.round() as i64;
        let oy = glyph.y.round() as i64;

        for row in 0..gm.height {
            let y = oy + row as i64;
            if y < 0 || y >= height as i64 {
                continue;
            }
            for col in 0..gm.width {
                let x = ox + col as i64;
                if x < 0 || x >= width as i64 {
                    continue;
                }
                let cov = coverage[row * gm.width + col] as u32;
                let alpha = (cov * a as u32 / 255) as u8;
                let px = out.get_pixel_mut(x as u32, y as u32);
                // Overlapping glyph boxes (kerning): keep the stronger coverage.
                px.0[3] = px.0[3].max(alpha);
            }
        }
    }

    out
}
