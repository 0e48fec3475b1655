use std::collections::HashSet;

use crate::coords::{CoordMapper, Vec2};

use super::state::InputState;
use super::types::{Key, MouseButton};

/// Input as seen by one frame tick.
///
/// Taken from the live [`InputState`] once per tick, before `update`. The
/// previous tick's key set is kept so "pressed this frame" is simply
/// "down now, up last tick".
#[derive(Debug, Default, Clone)]
pub struct InputSnapshot {
    current: HashSet<Key>,
    previous: HashSet<Key>,
    buttons: HashSet<MouseButton>,
    previous_buttons: HashSet<MouseButton>,
    /// Last known pointer position in device pixels.
    pointer_device: Option<Vec2>,
    /// Same position in logical coordinates under the tick's mapper.
    mouse: Vec2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the snapshot forward one tick.
    pub fn advance(&mut self, live: &InputState, mapper: &CoordMapper) {
        self.previous = std::mem::replace(&mut self.current, live.keys_down.clone());
        self.previous_buttons = std::mem::replace(&mut self.buttons, live.buttons_down.clone());

        // Off-window: keep reporting where the pointer was last seen.
        if let Some((x, y)) = live.pointer_pos {
            self.pointer_device = Some(Vec2::new(x, y));
        }
        if let Some(p) = self.pointer_device {
            self.mouse = mapper.to_logical(p);
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.current.contains(&key)
    }

    /// Down this tick and up the tick before.
    #[inline]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// Up this tick and down the tick before.
    #[inline]
    pub fn is_key_released(&self, key: Key) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }

    /// Pointer position in logical coordinates. The origin until the pointer
    /// first enters the window.
    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    #[inline]
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button) && !self.previous_buttons.contains(&button)
    }
}
