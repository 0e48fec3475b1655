//! Paint model shared between the canvas, text rasterizer and renderer.

pub mod color;

pub use color::Color;
