use crate::coords::{Rgb, Vec2};

use super::{GeometryKind, Material};

/// Starting state for one entity: its shape, look and placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EntitySeed {
    pub geometry: GeometryKind,
    pub material: Material,
    pub position: Vec2,
    pub scale: Vec2,
    pub orientation: f32,
}

impl EntitySeed {
    pub const fn new(
        geometry: GeometryKind,
        material: Material,
        position: Vec2,
        scale: Vec2,
        orientation: f32,
    ) -> Self {
        Self { geometry, material, position, scale, orientation }
    }
}

const ROUND_TABLE: GeometryKind = GeometryKind::Disk { radius: 1.0, resolution: 30 };
const PLANT: GeometryKind = GeometryKind::Plant { radius: 1.0, resolution: 10 };

/// The built-in room: three solid furniture pieces, two striped, one pulsing.
pub const DEFAULT_LAYOUT: [EntitySeed; 6] = [
    EntitySeed::new(
        ROUND_TABLE,
        Material::solid(Rgb::new(1.0, 0.0, 0.0)),
        Vec2::new(-0.5, -0.5),
        Vec2::splat(0.5),
        10.0,
    ),
    EntitySeed::new(
        PLANT,
        Material::solid(Rgb::new(0.0, 1.0, 0.0)),
        Vec2::new(0.25, 0.5),
        Vec2::splat(0.5),
        -30.0,
    ),
    EntitySeed::new(
        GeometryKind::Rack { radius: 1.0, k: 4, resolution: 80 },
        Material::solid(Rgb::new(0.0, 0.0, 1.0)),
        Vec2::new(0.0, 0.0),
        Vec2::splat(0.5),
        0.0,
    ),
    EntitySeed::new(
        ROUND_TABLE,
        Material::wide_red_stripes(Rgb::new(1.0, 1.0, 0.5)),
        Vec2::new(0.5, -0.5),
        Vec2::splat(0.3),
        0.0,
    ),
    EntitySeed::new(
        PLANT,
        Material::narrow_cyan_stripes(Rgb::new(1.0, 0.5, 0.0)),
        Vec2::new(0.9, 0.0),
        Vec2::splat(0.3),
        0.0,
    ),
    EntitySeed::new(
        GeometryKind::Rack { radius: 1.0, k: 3, resolution: 60 },
        Material::heartbeat(Rgb::new(0.5, 0.0, 0.0)),
        Vec2::new(-0.7, 0.7),
        Vec2::splat(0.8),
        0.0,
    ),
];
