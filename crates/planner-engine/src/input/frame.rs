use super::types::InputEvent;

/// Input gathered between two frames, in arrival order.
///
/// Held state is not tracked here; consumers fold the events into their own.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
