use super::frame::InputFrame;
use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Platform-side input state for one window.
///
/// Only what event translation needs: winit reports button transitions
/// without a position, so the last pointer position is kept here.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies `ev` to the tracked state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => self.focused = *f,
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Key { .. } => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn button_event_updates_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 10.0, 20.0));
        assert_eq!(state.pointer_pos, Some((10.0, 20.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn focus_is_tracked() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        assert!(state.focused);
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn events_keep_arrival_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let evs = [
            button(MouseButtonState::Pressed, 0.0, 0.0),
            InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 5.0 }),
            InputEvent::Key { key: Key::A, state: KeyState::Pressed, repeat: true },
            button(MouseButtonState::Released, 5.0, 5.0),
        ];
        for ev in evs.iter().cloned() {
            state.apply_event(&mut frame, ev);
        }
        assert_eq!(frame.events, evs.to_vec());

        frame.clear();
        assert!(frame.events.is_empty());
        assert_eq!(state.pointer_pos, Some((5.0, 5.0)));
    }
}
