//! GPU rendering subsystem.
//!
//! Consumes scene [`DrawCall`](crate::scene::DrawCall)s and issues wgpu
//! commands. The renderer owns its GPU resources and rebuilds them when the
//! surface format changes.
//!
//! Vertices stay in entity-local space; the per-draw model matrix carries
//! them straight to clip space.

mod ctx;
mod mesh_cache;
mod scene_renderer;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
