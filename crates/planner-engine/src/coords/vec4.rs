use core::ops::{Add, Mul};

use super::Mat4;

/// Homogeneous 4-component point or vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A 2D point lifted to homogeneous space (`z = 0`, `w = 1`).
    #[inline]
    pub const fn point(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::point(0.0, 0.0)
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    #[inline]
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

/// Row-vector transform: `result[j] = Σ_i v[i] * m[i][j]`.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    fn mul(self, rhs: Mat4) -> Vec4 {
        let v = self.to_array();
        let mut out = [0.0f32; 4];
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|i| v[i] * rhs.m[i][j]).sum();
        }
        Vec4::from_array(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_times_translation_moves_point() {
        let p = Vec4::point(1.0, 2.0) * Mat4::translation(0.5, -1.0);
        assert_eq!(p, Vec4::point(1.5, 1.0));
    }

    #[test]
    fn direction_ignores_translation() {
        let d = Vec4::new(1.0, 0.0, 0.0, 0.0) * Mat4::translation(3.0, 3.0);
        assert_eq!(d, Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn add_is_componentwise() {
        let s = Vec4::new(1.0, 2.0, 3.0, 4.0) + Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(s, Vec4::new(2.0, 3.0, 4.0, 5.0));
    }
}
