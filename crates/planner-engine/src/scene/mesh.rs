use super::{GeometryKey, MaterialKey};

/// Drawable: one geometry paired with one material.
///
/// Both halves are scene-owned; a mesh only stores their keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mesh {
    geometry: GeometryKey,
    material: MaterialKey,
}

impl Mesh {
    #[inline]
    pub(crate) fn new(geometry: GeometryKey, material: MaterialKey) -> Self {
        Self { geometry, material }
    }

    #[inline]
    pub fn geometry(&self) -> GeometryKey {
        self.geometry
    }

    #[inline]
    pub fn material(&self) -> MaterialKey {
        self.material
    }
}
