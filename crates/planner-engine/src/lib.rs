//! Event planner engine crate.
//!
//! Owns the scene model (geometry, materials, entities, camera) and the
//! platform and GPU runtime that displays it.

pub mod coords;
pub mod scene;

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
