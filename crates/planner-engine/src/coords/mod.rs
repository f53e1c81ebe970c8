//! Coordinate, color and transform types shared by the scene, renderer and editor.
//!
//! World space:
//! - normalized units, [-1, 1]² before the camera is applied
//! - origin at the center, +X right, +Y up
//!
//! Matrices are row-major and points are row vectors (`p * M`), so transforms
//! compose left to right: `Scale * Rotate * Translate * View`.

mod color;
mod mat4;
mod vec2;
mod vec4;
mod viewport;

pub use color::Rgb;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec4::Vec4;
pub use viewport::Viewport;
