use crate::assets::Bitmap;
use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawList};

/// A bitmap stretched over `dst`. Images and rendered text lines both draw
/// through this; the bitmap is already at its on-screen size, so `dst.size`
/// normally equals the bitmap's pixel size.
#[derive(Debug, Clone)]
pub struct BitmapCmd {
    pub bitmap: Bitmap,
    pub dst: Rect,
}

impl PartialEq for BitmapCmd {
    fn eq(&self, other: &Self) -> bool {
        Bitmap::ptr_eq(&self.bitmap, &other.bitmap) && self.dst == other.dst
    }
}

impl DrawList {
    /// Records `bitmap` at its natural size with its top-left corner at `top_left`.
    #[inline]
    pub fn push_bitmap(&mut self, bitmap: Bitmap, top_left: Vec2) {
        let (w, h) = bitmap.size();
        let dst = Rect::new(top_left.x, top_left.y, w as f32, h as f32);
        self.push(DrawCmd::Bitmap(BitmapCmd { bitmap, dst }));
    }
}
