use crate::coords::Mat4;

use super::{GeometryKey, MaterialUniforms};

/// One entity's worth of render work.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub geometry: GeometryKey,
    pub uniforms: MaterialUniforms,
    /// Final model-view matrix (`S * R * T * View`).
    pub model: Mat4,
}

/// Receiver of draw calls, implemented by the render collaborator.
///
/// Calls arrive in paint order; later calls render on top.
pub trait DrawSink {
    fn submit(&mut self, call: DrawCall);
}

impl DrawSink for Vec<DrawCall> {
    fn submit(&mut self, call: DrawCall) {
        self.push(call);
    }
}
