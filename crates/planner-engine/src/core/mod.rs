//! Contracts between the runtime loop and higher layers.
//!
//! Apps implement [`App`]; the runtime hands them a [`FrameCtx`] each frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
