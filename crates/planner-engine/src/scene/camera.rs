use crate::coords::{Mat4, Vec2};

/// Snapshot of the camera controls held this tick.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CameraInput {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
}

/// 2D view: a center point and half extents of the visible world rectangle.
///
/// Zoom is uniform: both half extents move by the same amount each tick, so an
/// anisotropic starting aspect is kept as an offset, never collapsed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub center: Vec2,
    pub half_width: f32,
    pub half_height: f32,
    /// World units per second.
    pub pan_speed: f32,
    /// Half-extent change per second.
    pub zoom_speed: f32,
    /// Half extents never shrink below this.
    pub min_half_extent: f32,
}

impl Camera {
    pub const DEFAULT_MIN_HALF_EXTENT: f32 = 0.05;

    pub fn new(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            min_half_extent: Self::DEFAULT_MIN_HALF_EXTENT,
        }
    }

    /// Scale by the inverse half extents, then translate by `-center`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rows([
            [1.0 / self.half_width, 0.0, 0.0, 0.0],
            [0.0, 1.0 / self.half_height, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-self.center.x, -self.center.y, 0.0, 1.0],
        ])
    }

    /// Applies one tick of held zoom / pan controls.
    pub fn pan_zoom(&mut self, dt: f32, input: &CameraInput) {
        let mut zoom = 0.0;
        if input.zoom_in {
            zoom -= self.zoom_speed * dt;
        }
        if input.zoom_out {
            zoom += self.zoom_speed * dt;
        }
        if zoom != 0.0 {
            self.half_width = (self.half_width + zoom).max(self.min_half_extent);
            self.half_height = (self.half_height + zoom).max(self.min_half_extent);
        }

        let step = self.pan_speed * dt;
        if input.pan_up {
            self.center.y += step;
        }
        if input.pan_down {
            self.center.y -= step;
        }
        if input.pan_right {
            self.center.x += step;
        }
        if input.pan_left {
            self.center.x -= step;
        }
    }
}

impl Default for Camera {
    /// Centered on the origin, showing [-1.5, 1.5]².
    fn default() -> Self {
        Self::new(Vec2::zero(), 1.5, 1.5)
    }
}
