//! Keyboard state built from window events.
//!
//! The engine asks `InputSystem::is_key_down` once per frame, which mirrors polling the
//! state of a single key right before rendering.

pub mod events;
pub mod keyboard;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
    pub use super::InputSystem;
}

use crate::window::events::{Event, WindowEvent};

use self::events::InputEvent;
use self::keyboard::{Key, Keyboard};

#[derive(Debug, Default)]
pub struct InputSystem {
    keyboard: Keyboard,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem::default()
    }

    /// Feeds a window event into the input state.
    pub fn on_event(&mut self, v: &Event) {
        match *v {
            Event::InputDevice(InputEvent::KeyboardPressed { key }) => {
                self.keyboard.on_key_pressed(key)
            }
            Event::InputDevice(InputEvent::KeyboardReleased { key }) => {
                self.keyboard.on_key_released(key)
            }
            // Releases are never delivered to an unfocused window.
            Event::Window(WindowEvent::LostFocus) => self.keyboard.reset(),
            _ => {}
        }
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }
}
