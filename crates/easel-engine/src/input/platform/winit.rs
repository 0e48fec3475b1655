use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{
    InputEvent, InputState, Key, Modifiers, MouseButton, PointerButtonEvent, PointerMoveEvent, Press,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Pointer positions stay in physical pixels; mapping to logical space
/// happens when the frame snapshot is taken. Returns `None` for events the
/// input subsystem does not track.
pub fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(map_modifiers(m.state())),
        WindowEvent::Focused(f) => InputEvent::Focused(*f),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,

        WindowEvent::CursorMoved { position, .. } => InputEvent::PointerMoved(PointerMoveEvent {
            x: position.x as f32,
            y: position.y as f32,
        }),

        // winit 0.30 does not attach modifiers to these; use the tracked state.
        WindowEvent::MouseInput { state: st, button, .. } => InputEvent::PointerButton(PointerButtonEvent {
            button: map_mouse_button(*button),
            press: map_press(*st),
            modifiers: state.modifiers,
        }),

        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: map_key(event.physical_key),
            press: map_press(event.state),
            modifiers: state.modifiers,
            repeat: event.repeat,
        },

        _ => return None,
    };
    Some(ev)
}

fn map_press(st: ElementState) -> Press {
    match st {
        ElementState::Pressed => Press::Pressed,
        ElementState::Released => Press::Released,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

/// Expands to a match from `KeyCode` to `Key` for variants spelled alike.
macro_rules! same_name {
    ($code:expr; $($name:ident)*) => {
        match $code {
            $(KeyCode::$name => Some(Key::$name),)*
            _ => None,
        }
    };
}

fn map_key(pk: PhysicalKey) -> Key {
    // winit 0.30 gives no stable number for native codes.
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    let named = same_name!(code;
        Escape Enter Tab Backspace Space
        Insert Delete Home End PageUp PageDown
        ArrowUp ArrowDown ArrowLeft ArrowRight
        Digit0 Digit1 Digit2 Digit3 Digit4 Digit5 Digit6 Digit7 Digit8 Digit9
        F1 F2 F3 F4 F5 F6 F7 F8 F9 F10 F11 F12
    );

    named
        .or_else(|| map_letter(code))
        .or_else(|| match code {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Key::Control),
            KeyCode::AltLeft | KeyCode::AltRight => Some(Key::Alt),
            KeyCode::SuperLeft | KeyCode::SuperRight => Some(Key::Meta),
            _ => None,
        })
        .unwrap_or(Key::Unknown(code as u32))
}

fn map_letter(code: KeyCode) -> Option<Key> {
    const LETTERS: [(KeyCode, Key); 26] = [
        (KeyCode::KeyA, Key::A), (KeyCode::KeyB, Key::B), (KeyCode::KeyC, Key::C),
        (KeyCode::KeyD, Key::D), (KeyCode::KeyE, Key::E), (KeyCode::KeyF, Key::F),
        (KeyCode::KeyG, Key::G), (KeyCode::KeyH, Key::H), (KeyCode::KeyI, Key::I),
        (KeyCode::KeyJ, Key::J), (KeyCode::KeyK, Key::K), (KeyCode::KeyL, Key::L),
        (KeyCode::KeyM, Key::M), (KeyCode::KeyN, Key::N), (KeyCode::KeyO, Key::O),
        (KeyCode::KeyP, Key::P), (KeyCode::KeyQ, Key::Q), (KeyCode::KeyR, Key::R),
        (KeyCode::KeyS, Key::S), (KeyCode::KeyT, Key::T), (KeyCode::KeyU, Key::U),
        (KeyCode::KeyV, Key::V), (KeyCode::KeyW, Key::W), (KeyCode::KeyX, Key::X),
        (KeyCode::KeyY, Key::Y), (KeyCode::KeyZ, Key::Z),
    ];
    LETTERS.iter().find(|(c, _)| *c == code).map(|(_, k)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_and_digit_codes_map_to_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyK)), Key::K);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit2)), Key::Digit2);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn both_shift_keys_are_one_key() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftLeft)), Key::Shift);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)), Key::Shift);
    }

    #[test]
    fn unnamed_code_is_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::NumpadAdd)), Key::Unknown(_)));
    }

    #[test]
    fn focus_event_passes_through() {
        let ev = translate_window_event(&InputState::default(), &WindowEvent::Focused(true));
        assert_eq!(ev, Some(InputEvent::Focused(true)));
    }
}
