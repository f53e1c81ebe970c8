use super::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a pixel position (top-left origin, +Y down) to normalized
    /// coordinates in [-1, 1]² with +Y up.
    ///
    /// An invalid viewport maps everything to the origin.
    pub fn to_normalized(self, x: f32, y: f32) -> Vec2 {
        if !self.is_valid() {
            return Vec2::zero();
        }
        let cx = (x / self.width - 0.5) / 0.5;
        let cy = -(y / self.height - 0.5) / 0.5;
        Vec2::new(cx, cy)
    }
}
