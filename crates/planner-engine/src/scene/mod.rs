//! Scene graph.
//!
//! Responsibilities:
//! - generate immutable geometry and describe materials
//! - compose them into meshes and place meshes as entities
//! - compute per-entity transforms against a camera
//! - hand draw calls to a renderer through [`DrawSink`]

mod camera;
mod draw;
mod entity;
mod error;
mod geometry;
mod layout;
mod material;
mod mesh;
mod store;

pub use camera::{Camera, CameraInput};
pub use draw::{DrawCall, DrawSink};
pub use entity::{Entity, ROTATION_RATE};
pub use error::SceneError;
pub use geometry::{Geometry, GeometryKind, Topology, MAX_RESOLUTION, MIN_RESOLUTION};
pub use layout::{EntitySeed, DEFAULT_LAYOUT};
pub use material::{pulse_color, stripe_phase, Material, MaterialKind, MaterialUniforms, HIGHLIGHT};
pub use mesh::Mesh;
pub use store::Scene;

slotmap::new_key_type! {
    /// Stable handle to a scene-owned [`Geometry`].
    pub struct GeometryKey;
    /// Stable handle to a scene-owned [`Material`].
    pub struct MaterialKey;
    /// Stable handle to a scene-owned [`Mesh`].
    pub struct MeshKey;
}
