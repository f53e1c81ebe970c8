use crate::coords::{Mat4, Vec2};

use super::{Camera, DrawCall, DrawSink, Material, Mesh, MeshKey};

/// Degrees per second applied while a rotate control is held.
pub const ROTATION_RATE: f32 = 200.0;

/// Placed, selectable scene member.
///
/// The persisted transform is `base_position` / `scale` / `base_orientation`.
/// On top of it sit two transient offsets: `drag_offset` lives only for the
/// duration of a drag gesture, `rotation_offset` accumulates while a rotate
/// control is held and is kept afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    mesh: MeshKey,
    base_position: Vec2,
    scale: Vec2,
    base_orientation: f32,
    drag_offset: Vec2,
    rotation_offset: f32,
    selected: bool,
}

impl Entity {
    pub fn new(mesh: MeshKey, position: Vec2, scale: Vec2, orientation_degrees: f32) -> Self {
        Self {
            mesh,
            base_position: position,
            scale,
            base_orientation: orientation_degrees,
            drag_offset: Vec2::zero(),
            rotation_offset: 0.0,
            selected: false,
        }
    }

    #[inline]
    pub fn mesh(&self) -> MeshKey {
        self.mesh
    }

    #[inline]
    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    /// Position including any uncommitted drag.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.base_position + self.drag_offset
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    #[inline]
    pub fn base_orientation(&self) -> f32 {
        self.base_orientation
    }

    /// Orientation in degrees including the rotation offset.
    #[inline]
    pub fn orientation(&self) -> f32 {
        self.base_orientation + self.rotation_offset
    }

    #[inline]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    #[inline]
    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Overwrites the in-progress drag offset.
    #[inline]
    pub fn set_drag_offset(&mut self, offset: Vec2) {
        self.drag_offset = offset;
    }

    /// Folds `offset` into the base position and clears the drag offset.
    pub fn commit_drag(&mut self, offset: Vec2) {
        self.base_position += offset;
        self.drag_offset = Vec2::zero();
    }

    /// Adds `sign * dt * ROTATION_RATE` degrees to the rotation offset.
    pub fn accumulate_rotation(&mut self, dt: f32, sign: f32) {
        self.rotation_offset += sign * dt * ROTATION_RATE;
    }

    /// Model transform before the camera: `S * R * T`.
    pub fn local_to_world(&self) -> Mat4 {
        let pos = self.position();
        Mat4::scale(self.scale.x, self.scale.y)
            * Mat4::rotation_z_degrees(self.orientation())
            * Mat4::translation(pos.x, pos.y)
    }

    /// `S * R * T * View`.
    pub fn world_transform(&self, camera: &Camera) -> Mat4 {
        self.local_to_world() * camera.view_matrix()
    }

    /// Applies the material, then submits the geometry draw.
    pub fn draw(
        &self,
        mesh: &Mesh,
        material: &Material,
        camera: &Camera,
        elapsed: f32,
        sink: &mut dyn DrawSink,
    ) {
        sink.submit(DrawCall {
            geometry: mesh.geometry(),
            uniforms: material.apply(self.selected, elapsed),
            model: self.world_transform(camera),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    const EPS: f32 = 1e-5;

    fn entity(position: Vec2, scale: Vec2, orientation: f32) -> Entity {
        Entity::new(MeshKey::from(KeyData::from_ffi(1)), position, scale, orientation)
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn identity_camera_reduces_to_scale_rotate_translate() {
        let e = entity(Vec2::new(0.25, 0.5), Vec2::new(0.5, 0.5), -30.0);
        let cam = Camera::new(Vec2::zero(), 1.0, 1.0);
        let expected = Mat4::scale(0.5, 0.5)
            * Mat4::rotation_z_degrees(-30.0)
            * Mat4::translation(0.25, 0.5);
        assert!(e.world_transform(&cam).approx_eq(&expected, EPS));
    }

    #[test]
    fn offsets_feed_the_transform() {
        let mut e = entity(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), 10.0);
        e.set_drag_offset(Vec2::new(0.3, -0.1));
        e.accumulate_rotation(0.1, 1.0);
        let expected = Mat4::rotation_z_degrees(30.0) * Mat4::translation(0.3, -0.1);
        assert!(e.local_to_world().approx_eq(&expected, EPS));
    }

    #[test]
    fn camera_is_applied_last() {
        let e = entity(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), 0.0);
        let cam = Camera::new(Vec2::zero(), 2.0, 2.0);
        let m = e.world_transform(&cam);
        // translation 1.0 scaled by 1/2
        assert!((m.m[3][0] - 0.5).abs() < EPS);
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn commit_drag_folds_offset_and_resets() {
        let mut e = entity(Vec2::new(-0.5, -0.5), Vec2::splat(0.5), 0.0);
        e.set_drag_offset(Vec2::new(0.25, 0.125));
        assert_eq!(e.position(), Vec2::new(-0.25, -0.375));
        e.commit_drag(Vec2::new(0.25, 0.125));
        assert_eq!(e.base_position(), Vec2::new(-0.25, -0.375));
        assert_eq!(e.drag_offset(), Vec2::zero());
    }

    #[test]
    fn set_drag_offset_overwrites() {
        let mut e = entity(Vec2::zero(), Vec2::splat(1.0), 0.0);
        e.set_drag_offset(Vec2::new(1.0, 1.0));
        e.set_drag_offset(Vec2::new(0.5, 0.0));
        assert_eq!(e.drag_offset(), Vec2::new(0.5, 0.0));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_accumulates_at_fixed_rate() {
        let mut e = entity(Vec2::zero(), Vec2::splat(1.0), 5.0);
        e.accumulate_rotation(0.5, 1.0);
        assert!((e.rotation_offset() - 100.0).abs() < EPS);
        e.accumulate_rotation(0.25, -1.0);
        assert!((e.rotation_offset() - 50.0).abs() < EPS);
        assert!((e.orientation() - 55.0).abs() < EPS);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_submits_transform_and_uniforms() {
        use crate::coords::Rgb;
        use crate::scene::GeometryKey;

        let geometry = GeometryKey::from(KeyData::from_ffi(7));
        let material_key = crate::scene::MaterialKey::from(KeyData::from_ffi(3));
        let mesh = Mesh::new(geometry, material_key);
        let material = Material::solid(Rgb::red());
        let mut e = entity(Vec2::new(0.1, 0.2), Vec2::splat(0.5), 0.0);
        e.set_selected(true);

        let cam = Camera::default();
        let mut calls: Vec<DrawCall> = Vec::new();
        e.draw(&mesh, &material, &cam, 1.0, &mut calls);

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].geometry, geometry);
        assert!(calls[0].uniforms.selected);
        assert_eq!(calls[0].uniforms.color, Rgb::white());
        assert_eq!(calls[0].model, e.world_transform(&cam));
    }
}
