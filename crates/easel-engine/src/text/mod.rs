//! Fonts, word-wrap, block placement and the rendered-line cache.
//!
//! Text is rasterized on the CPU one line at a time with `fontdue`; each
//! rendered line becomes a [`Bitmap`](crate::assets::Bitmap) that the renderer
//! draws like any other image.

mod cache;
mod font;
mod layout;
mod raster;
mod style;

pub use cache::TextCache;
pub use font::{DEFAULT_FONT_PATHS, FontCache, FontHandle, FontKey, FontLoadError, FontSpec};
pub use layout::{place_lines, wrap_lines};
pub use style::{DEFAULT_FONT_SIZE, TextStyle};
