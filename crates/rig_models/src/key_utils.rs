use bevy::prelude::*;

/// Converts a human-readable key name from the input config into a `KeyCode`.
/// Names are case-insensitive; unknown names yield `None`.
pub fn convert(name: &str) -> Option<KeyCode> {
    let key = match name.trim().to_ascii_uppercase().as_str() {
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        "SPACE" => KeyCode::Space,
        "TAB" => KeyCode::Tab,
        "ESCAPE" | "ESC" => KeyCode::Escape,
        "ENTER" => KeyCode::Enter,
        "BACKQUOTE" | "`" => KeyCode::Backquote,
        "SHIFT" => KeyCode::ShiftLeft,
        "CTRL" | "CONTROL" => KeyCode::ControlLeft,
        "ALT" => KeyCode::AltLeft,
        other => return convert_letter(other),
    };
    Some(key)
}

fn convert_letter(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let key = match c {
        'A' => KeyCode::KeyA, 'B' => KeyCode::KeyB, 'C' => KeyCode::KeyC, 'D' => KeyCode::KeyD,
        'E' => KeyCode::KeyE, 'F' => KeyCode::KeyF, 'G' => KeyCode::KeyG, 'H' => KeyCode::KeyH,
        'I' => KeyCode::KeyI, 'J' => KeyCode::KeyJ, 'K' => KeyCode::KeyK, 'L' => KeyCode::KeyL,
        'M' => KeyCode::KeyM, 'N' => KeyCode::KeyN, 'O' => KeyCode::KeyO, 'P' => KeyCode::KeyP,
        'Q' => KeyCode::KeyQ, 'R' => KeyCode::KeyR, 'S' => KeyCode::KeyS, 'T' => KeyCode::KeyT,
        'U' => KeyCode::KeyU, 'V' => KeyCode::KeyV, 'W' => KeyCode::KeyW, 'X' => KeyCode::KeyX,
        'Y' => KeyCode::KeyY, 'Z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0, '1' => KeyCode::Digit1, '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3, '4' => KeyCode::Digit4, '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6, '7' => KeyCode::Digit7, '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        _ => return None,
    };
    Some(key)
}

/// Converts a mouse button name (`"MouseLeft"`, `"MouseRight"`, `"MouseMiddle"`,
/// `"MouseBack"`, `"MouseForward"`) into a `MouseButton`.
pub fn convert_mouse(name: &str) -> Option<MouseButton> {
    match name.trim().to_ascii_uppercase().as_str() {
        "MOUSELEFT" => Some(MouseButton::Left),
        "MOUSERIGHT" => Some(MouseButton::Right),
        "MOUSEMIDDLE" => Some(MouseButton::Middle),
        "MOUSEBACK" => Some(MouseButton::Back),
        "MOUSEFORWARD" => Some(MouseButton::Forward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys() {
        assert_eq!(convert("f1"), Some(KeyCode::F1));
        assert_eq!(convert(" Space "), Some(KeyCode::Space));
        assert_eq!(convert("esc"), Some(KeyCode::Escape));
    }

    #[test]
    fn single_characters() {
        assert_eq!(convert("a"), Some(KeyCode::KeyA));
        assert_eq!(convert("7"), Some(KeyCode::Digit7));
        assert_eq!(convert("AB"), None);
        assert_eq!(convert(""), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(convert_mouse("MouseRight"), Some(MouseButton::Right));
        assert_eq!(convert_mouse("mouseleft"), Some(MouseButton::Left));
        assert_eq!(convert_mouse("Right"), None);
    }
}
