use crate::paint::Color;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are kept in insertion order, which is paint order: later
/// commands draw over earlier ones. There is no depth sorting.
#[derive(Debug, Default)]
pub struct DrawList {
    clear_color: Color,
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh frame filled with `color`.
    ///
    /// Everything recorded before is dropped, since a full-frame fill would
    /// cover it anyway. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.items.clear();
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
