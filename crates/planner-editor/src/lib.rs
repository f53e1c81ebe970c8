//! Event planner editor: interactive arrangement of a scene on top of
//! `planner-engine`.
//!
//! ```rust,ignore
//! use planner_editor::Editor;
//!
//! Editor::new().title("Event Planner").run()?;
//! ```

pub mod app;
pub mod bindings;
pub mod controller;
pub mod workspace;

pub use app::{Editor, EditorConfig};
pub use bindings::KeyBindings;
pub use controller::{Gesture, InteractionController, DEFAULT_PICK_RADIUS};
pub use workspace::Workspace;
