use crate::coords::Vec2;

/// Primitive topology of a vertex list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    TriangleStrip,
    /// Vertex 0 is the hub; every consecutive outline pair forms a triangle with it.
    TriangleFan,
}

/// Shape recipe a [`Geometry`] was generated from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeometryKind {
    /// Unit right triangle `(0,0) (1,0) (0,1)`.
    Triangle,
    /// Unit square as a 4-vertex strip.
    Quad,
    /// Round table: a regular polygon approximating a circle.
    Disk { radius: f32, resolution: u32 },
    /// Star outline alternating between `radius` and `radius / 2`.
    Plant { radius: f32, resolution: u32 },
    /// Coat rack: rose curve `r(θ) = radius · cos(k θ)`.
    Rack { radius: f32, k: u32, resolution: u32 },
}

/// Fewest outline steps a fan shape accepts.
pub const MIN_RESOLUTION: u32 = 3;

/// Most outline steps a fan shape accepts: `resolution + 2` vertices must stay
/// addressable by `u16` indices. Even, so rounding a plant up stays in range.
pub const MAX_RESOLUTION: u32 = u16::MAX as u32 - 3;

/// Immutable vertex outline plus topology.
///
/// Positions are 2D and in local space. The only way to build one is through the
/// generators below; vertex data never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    kind: GeometryKind,
    topology: Topology,
    vertices: Vec<Vec2>,
}

impl Geometry {
    /// Generates the geometry described by `kind`.
    pub fn from_kind(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Triangle => Self::triangle(),
            GeometryKind::Quad => Self::quad(),
            GeometryKind::Disk { radius, resolution } => Self::disk(radius, resolution),
            GeometryKind::Plant { radius, resolution } => Self::plant(radius, resolution),
            GeometryKind::Rack { radius, k, resolution } => Self::rack(radius, k, resolution),
        }
    }

    pub fn triangle() -> Self {
        Self {
            kind: GeometryKind::Triangle,
            topology: Topology::TriangleList,
            vertices: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
        }
    }

    pub fn quad() -> Self {
        Self {
            kind: GeometryKind::Quad,
            topology: Topology::TriangleStrip,
            vertices: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            ],
        }
    }

    /// Circle fan with `resolution` equal angular steps.
    pub fn disk(radius: f32, resolution: u32) -> Self {
        let resolution = clamp_resolution(resolution);
        Self {
            kind: GeometryKind::Disk { radius, resolution },
            topology: Topology::TriangleFan,
            vertices: fan(resolution, |_, _| radius),
        }
    }

    /// Spiky fan: odd outline vertices sit on `radius`, even ones on `radius / 2`.
    ///
    /// The outline only closes when the first and last outline vertex share a
    /// radius, so an odd `resolution` is rounded up.
    pub fn plant(radius: f32, resolution: u32) -> Self {
        let mut resolution = clamp_resolution(resolution);
        if resolution % 2 == 1 {
            log::debug!("plant resolution {resolution} is odd; using {}", resolution + 1);
            resolution += 1;
        }
        Self {
            kind: GeometryKind::Plant { radius, resolution },
            topology: Topology::TriangleFan,
            vertices: fan(resolution, |i, _| if i % 2 == 0 { radius / 2.0 } else { radius }),
        }
    }

    /// Rose-curve fan with `k` lobe frequency (`2k` petals for even `k`, `k` for odd).
    pub fn rack(radius: f32, k: u32, resolution: u32) -> Self {
        let k = k.max(1);
        let resolution = clamp_resolution(resolution);
        Self {
            kind: GeometryKind::Rack { radius, k, resolution },
            topology: Topology::TriangleFan,
            vertices: fan(resolution, |_, theta| radius * (k as f32 * theta).cos()),
        }
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Expands the topology into a plain triangle list.
    ///
    /// wgpu has no fan topology, so every geometry is drawn indexed as a list.
    /// Strip triangles alternate winding to keep a consistent facing.
    pub fn triangle_indices(&self) -> Vec<u16> {
        debug_assert!(self.vertices.len() <= u16::MAX as usize);
        let n = self.vertices.len() as u16;
        match self.topology {
            Topology::TriangleList => (0..n - n % 3).collect(),
            Topology::TriangleStrip => (0..n.saturating_sub(2))
                .flat_map(|i| if i % 2 == 0 { [i, i + 1, i + 2] } else { [i + 1, i, i + 2] })
                .collect(),
            Topology::TriangleFan => (1..n.saturating_sub(1))
                .flat_map(|i| [0, i, i + 1])
                .collect(),
        }
    }

    /// Flattened `[x, y]` pairs for vertex buffer upload.
    pub fn positions(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| [v.x, v.y]).collect()
    }
}

fn clamp_resolution(resolution: u32) -> u32 {
    if resolution > MAX_RESOLUTION {
        log::warn!("resolution {resolution} exceeds {MAX_RESOLUTION}; clamping");
    }
    resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION)
}

/// Builds `[origin, outline_0 ..= outline_resolution]`.
///
/// Outline vertex `i` (1-based) sits at `(i - 1) * 360 / resolution` degrees, so
/// the last vertex lands on a full revolution. Angles are derived from the step
/// index rather than accumulated to avoid drift.
fn fan(resolution: u32, radius_at: impl Fn(u32, f32) -> f32) -> Vec<Vec2> {
    let step = 360.0 / resolution as f32;
    let mut out = Vec::with_capacity(resolution as usize + 2);
    out.push(Vec2::zero());
    for i in 1..=resolution + 1 {
        let theta = ((i - 1) as f32 * step).to_radians();
        let r = radius_at(i, theta);
        out.push(Vec2::new(r * theta.cos(), r * theta.sin()));
    }
    out
}
