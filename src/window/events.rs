use crate::input::events::InputEvent;

/// The status of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    Closed,
    /// The window lost focus of user input.
    LostFocus,
    /// The framebuffer has been resized, in physical pixels.
    Resized(u32, u32),
}

/// The enumerations of all events that come from the window and its input devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Window(WindowEvent),
    InputDevice(InputEvent),
}
