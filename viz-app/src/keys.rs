use sdl2::keyboard::Scancode;
use wavescope_core::InputEvent;

/// Keyboard layout standing in for the joystick and buttons.
pub fn input_event(scancode: Scancode) -> Option<InputEvent> {
    match scancode {
        Scancode::Up => Some(InputEvent::JoyUp),
        Scancode::Down => Some(InputEvent::JoyDown),
        Scancode::Right => Some(InputEvent::JoyRight),
        Scancode::Left => Some(InputEvent::JoyLeft),
        Scancode::W | Scancode::Space => Some(InputEvent::Wave),
        Scancode::M | Scancode::Escape => Some(InputEvent::Menu),
        _ => None,
    }
}
