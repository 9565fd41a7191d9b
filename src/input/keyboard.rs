use std::collections::HashSet;

/// Symbolic name for the keyboard keys the programs react to. Other keys are dropped when
/// window events are translated.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    /// The Escape key, next to F1.
    Escape,
}

/// Keyboard state. A key stays down from its press until its release.
#[derive(Debug, Default)]
pub struct Keyboard {
    downs: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        self.downs.insert(key);
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        self.downs.remove(&key);
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut kb = Keyboard::new();
        assert!(!kb.is_key_down(Key::Escape));

        kb.on_key_pressed(Key::Escape);
        kb.on_key_pressed(Key::Escape);
        assert!(kb.is_key_down(Key::Escape));

        kb.on_key_released(Key::Escape);
        assert!(!kb.is_key_down(Key::Escape));
    }

    #[test]
    fn reset() {
        let mut kb = Keyboard::new();
        kb.on_key_pressed(Key::Escape);
        kb.reset();
        assert!(!kb.is_key_down(Key::Escape));
    }
}
