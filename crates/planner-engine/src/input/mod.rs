//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates
//! platform events into [`InputEvent`]s.

mod frame;
mod state;
pub(crate) mod translate;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
