use std::fmt;

/// Error returned when scene construction references a missing resource.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneError {
    UnknownGeometry,
    UnknownMaterial,
    UnknownMesh,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            SceneError::UnknownGeometry => "geometry",
            SceneError::UnknownMaterial => "material",
            SceneError::UnknownMesh => "mesh",
        };
        write!(f, "scene error: {what} key does not belong to this scene")
    }
}

impl std::error::Error for SceneError {}
