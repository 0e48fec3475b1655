use super::Vec2;

/// Nine-way anchor used to place images and text blocks.
///
/// The anchor names which point of the placed box lands on the requested
/// position: `TopLeft` puts the box's top-left corner there, `Center` its
/// center, `BottomRight` its bottom-right corner, and so on.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Align {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Align {
    /// Fraction of the box width that lies left of the anchor (0, ½ or 1).
    #[inline]
    pub fn horizontal(self) -> f32 {
        match self {
            Align::TopLeft | Align::CenterLeft | Align::BottomLeft => 0.0,
            Align::TopCenter | Align::Center | Align::BottomCenter => 0.5,
            Align::TopRight | Align::CenterRight | Align::BottomRight => 1.0,
        }
    }

    /// Fraction of the box height that lies above the anchor (0, ½ or 1).
    #[inline]
    pub fn vertical(self) -> f32 {
        match self {
            Align::TopLeft | Align::TopCenter | Align::TopRight => 0.0,
            Align::CenterLeft | Align::Center | Align::CenterRight => 0.5,
            Align::BottomLeft | Align::BottomCenter | Align::BottomRight => 1.0,
        }
    }

    /// Top-left corner (device space, Y-down) of a `size` box anchored at `anchor`.
    ///
    /// Offsets are floored so centered boxes with odd sizes land on whole pixels.
    #[inline]
    pub fn place(self, anchor: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            anchor.x - (size.x * self.horizontal()).floor(),
            anchor.y - (size.y * self.vertical()).floor(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Vec2 = Vec2::new(100.0, 50.0);
    const SIZE: Vec2 = Vec2::new(40.0, 20.0);

    #[test]
    fn corners() {
        assert_eq!(Align::TopLeft.place(ANCHOR, SIZE), Vec2::new(100.0, 50.0));
        assert_eq!(Align::TopRight.place(ANCHOR, SIZE), Vec2::new(60.0, 50.0));
        assert_eq!(Align::BottomLeft.place(ANCHOR, SIZE), Vec2::new(100.0, 30.0));
        assert_eq!(Align::BottomRight.place(ANCHOR, SIZE), Vec2::new(60.0, 30.0));
    }

    #[test]
    fn centers() {
        assert_eq!(Align::Center.place(ANCHOR, SIZE), Vec2::new(80.0, 40.0));
        assert_eq!(Align::TopCenter.place(ANCHOR, SIZE), Vec2::new(80.0, 50.0));
        assert_eq!(Align::CenterRight.place(ANCHOR, SIZE), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn odd_sizes_floor_the_offset() {
        let p = Align::Center.place(Vec2::new(10.0, 10.0), Vec2::new(5.0, 3.0));
        assert_eq!(p, Vec2::new(8.0, 9.0));
    }
}
