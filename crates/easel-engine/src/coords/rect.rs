use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    /// Rectangle spanned by two opposite corners, in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Rect::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Same area with non-negative width and height.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::from_corners(self.origin, self.origin + self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn from_corners_is_order_independent() {
        let a = Vec2::new(10.0, 40.0);
        let b = Vec2::new(30.0, 5.0);
        assert_eq!(Rect::from_corners(a, b), r(10.0, 5.0, 20.0, 35.0));
        assert_eq!(Rect::from_corners(b, a), r(10.0, 5.0, 20.0, 35.0));
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
        assert_eq!(r(10.0, 8.0, -4.0, -3.0).normalized(), r(6.0, 5.0, 4.0, 3.0));
    }

    #[test]
    fn corners() {
        let rect = r(2.0, 3.0, 4.0, 5.0);
        assert_eq!(rect.min(), Vec2::new(2.0, 3.0));
        assert_eq!(rect.max(), Vec2::new(6.0, 8.0));
    }

    #[test]
    fn zero_extent_is_empty() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
