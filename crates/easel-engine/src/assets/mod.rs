//! Bitmaps and images.
//!
//! Everything here is CPU-side. The renderer uploads a [`Bitmap`] to the GPU
//! the first time it is drawn and keys the upload on [`Bitmap::id`], so two
//! clones of the same bitmap share one texture.

mod bitmap;
mod image;

pub use bitmap::{Bitmap, BitmapId};
pub use image::{Image, ImageLoadError, PLACEHOLDER_SIZE};
