use std::collections::HashSet;

use planner_engine::input::Key;
use planner_engine::scene::CameraInput;

/// Keyboard layout of the editor's held and one-shot actions.
///
/// Held actions (camera, rotation) act every tick while their key is down.
/// Delete fires when a delete key is released; quit fires on press.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub zoom_in: Key,
    pub zoom_out: Key,
    pub pan_up: Key,
    pub pan_down: Key,
    pub pan_left: Key,
    pub pan_right: Key,
    /// Counter-clockwise.
    pub rotate_left: Key,
    /// Clockwise.
    pub rotate_right: Key,
    pub delete: Vec<Key>,
    pub quit: Option<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            zoom_in: Key::Z,
            zoom_out: Key::X,
            pan_up: Key::I,
            pan_down: Key::K,
            pan_left: Key::J,
            pan_right: Key::L,
            rotate_left: Key::A,
            rotate_right: Key::D,
            // Backspace is what macOS keyboards label "delete".
            delete: vec![Key::Delete, Key::Backspace],
            quit: Some(Key::Escape),
        }
    }
}

impl KeyBindings {
    pub fn is_delete(&self, key: Key) -> bool {
        self.delete.contains(&key)
    }

    pub fn is_quit(&self, key: Key) -> bool {
        self.quit == Some(key)
    }

    /// Camera controls held in `held`.
    pub fn camera_input(&self, held: &HashSet<Key>) -> CameraInput {
        CameraInput {
            zoom_in: held.contains(&self.zoom_in),
            zoom_out: held.contains(&self.zoom_out),
            pan_up: held.contains(&self.pan_up),
            pan_down: held.contains(&self.pan_down),
            pan_left: held.contains(&self.pan_left),
            pan_right: held.contains(&self.pan_right),
        }
    }

    /// Net rotation direction held in `held`: `+1` left, `-1` right, `0` for
    /// neither or both.
    pub fn rotation_sign(&self, held: &HashSet<Key>) -> f32 {
        let mut sign = 0.0;
        if held.contains(&self.rotate_left) {
            sign += 1.0;
        }
        if held.contains(&self.rotate_right) {
            sign -= 1.0;
        }
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> HashSet<Key> {
        keys.iter().copied().collect()
    }

    #[test]
    fn defaults_follow_classic_layout() {
        let b = KeyBindings::default();
        assert_eq!((b.zoom_in, b.zoom_out), (Key::Z, Key::X));
        assert_eq!((b.pan_up, b.pan_down, b.pan_left, b.pan_right), (Key::I, Key::K, Key::J, Key::L));
        assert!(b.is_delete(Key::Delete));
        assert!(b.is_delete(Key::Backspace));
        assert!(!b.is_delete(Key::D));
        assert!(b.is_quit(Key::Escape));
    }

    #[test]
    fn camera_input_reflects_held_keys() {
        let b = KeyBindings::default();
        let input = b.camera_input(&held(&[Key::Z, Key::L]));
        assert_eq!(
            input,
            CameraInput { zoom_in: true, pan_right: true, ..CameraInput::default() }
        );
    }

    #[test]
    fn opposing_rotation_cancels() {
        let b = KeyBindings::default();
        assert_eq!(b.rotation_sign(&held(&[Key::A])), 1.0);
        assert_eq!(b.rotation_sign(&held(&[Key::D])), -1.0);
        assert_eq!(b.rotation_sign(&held(&[Key::A, Key::D])), 0.0);
    }

    #[test]
    fn quit_can_be_unbound() {
        let b = KeyBindings { quit: None, ..KeyBindings::default() };
        assert!(!b.is_quit(Key::Escape));
    }
}
