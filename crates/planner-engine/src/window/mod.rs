//! Window and runtime loop.
//!
//! Owns the `winit` event loop and the editor window, and wires it to its GPU
//! context, input state and frame clock.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
