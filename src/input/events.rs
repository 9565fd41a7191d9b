use super::keyboard::Key;

/// The enumerations of all events that come from keyboard devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyboardPressed { key: Key },
    KeyboardReleased { key: Key },
}
