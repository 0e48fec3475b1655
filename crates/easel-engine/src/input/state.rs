use std::collections::HashSet;
use std::hash::Hash;

use super::types::{InputEvent, Key, Modifiers, MouseButton, PointerButtonEvent, PointerMoveEvent, Press};

/// Live input state for the window, updated as platform events arrive.
///
/// This is the raw "what is held right now" view. Frame code reads the
/// per-tick [`InputSnapshot`](super::InputSnapshot) taken from it instead, so
/// a key pressed and released between two ticks cannot be half-seen.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Pointer position in device pixels, `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,

            InputEvent::Focused(focused) => {
                self.focused = focused;
                // Releases are not delivered to unfocused windows.
                if !focused {
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => self.pointer_pos = Some((x, y)),
            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, press, modifiers, .. } => {
                self.modifiers = modifiers;
                set_held(&mut self.keys_down, key, press);
            }

            InputEvent::PointerButton(PointerButtonEvent { button, press, modifiers }) => {
                self.modifiers = modifiers;
                set_held(&mut self.buttons_down, button, press);
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

fn set_held<T: Eq + Hash>(held: &mut HashSet<T>, item: T, press: Press) {
    if press.is_pressed() {
        held.insert(item);
    } else {
        held.remove(&item);
    }
}
