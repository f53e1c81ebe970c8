use crate::coords::{Rgb, Vec2};

/// Color used for selected entities, overriding the material's base color.
pub const HIGHLIGHT: Rgb = Rgb::white();

/// Pipeline family a material renders with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MaterialKind {
    Solid,
    Stripes,
    Pulse,
}

/// Visual parameterization of a shape.
///
/// The set of families is closed; renderers dispatch on [`MaterialKind`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    Solid { color: Rgb },
    /// Two-tone diagonal stripes. `frequency` is stripes per local unit.
    Stripes { base: Rgb, stripe: Rgb, frequency: f32 },
    /// Heartbeat: blends the base color toward a pulsing magenta over time.
    Pulse { base: Rgb },
}

/// Uniform values a renderer applies before drawing one entity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialUniforms {
    pub kind: MaterialKind,
    /// Base color, already replaced by [`HIGHLIGHT`] when selected.
    pub color: Rgb,
    pub stripe_color: Rgb,
    pub stripe_frequency: f32,
    /// Seconds since startup. Only meaningful for [`MaterialKind::Pulse`].
    pub time: f32,
    pub selected: bool,
}

impl Material {
    #[inline]
    pub const fn solid(color: Rgb) -> Self {
        Material::Solid { color }
    }

    #[inline]
    pub const fn stripes(base: Rgb, stripe: Rgb, frequency: f32) -> Self {
        Material::Stripes { base, stripe, frequency }
    }

    /// Wide red stripes (one stripe per unit) over `base`.
    #[inline]
    pub const fn wide_red_stripes(base: Rgb) -> Self {
        Self::stripes(base, Rgb::red(), 1.0)
    }

    /// Narrow cyan stripes (five per unit) over `base`.
    #[inline]
    pub const fn narrow_cyan_stripes(base: Rgb) -> Self {
        Self::stripes(base, Rgb::cyan(), 5.0)
    }

    #[inline]
    pub const fn heartbeat(base: Rgb) -> Self {
        Material::Pulse { base }
    }

    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::Solid { .. } => MaterialKind::Solid,
            Material::Stripes { .. } => MaterialKind::Stripes,
            Material::Pulse { .. } => MaterialKind::Pulse,
        }
    }

    pub fn base_color(&self) -> Rgb {
        match *self {
            Material::Solid { color } => color,
            Material::Stripes { base, .. } | Material::Pulse { base } => base,
        }
    }

    /// Produces the uniform set for one draw.
    ///
    /// Fields a family does not use are zeroed.
    pub fn apply(&self, selected: bool, elapsed: f32) -> MaterialUniforms {
        let color = if selected { HIGHLIGHT } else { self.base_color() };
        let mut out = MaterialUniforms {
            kind: self.kind(),
            color,
            stripe_color: Rgb::black(),
            stripe_frequency: 0.0,
            time: 0.0,
            selected,
        };
        match *self {
            Material::Solid { .. } => {}
            Material::Stripes { stripe, frequency, .. } => {
                out.stripe_color = stripe;
                out.stripe_frequency = frequency;
            }
            Material::Pulse { .. } => out.time = elapsed,
        }
        out
    }
}

impl MaterialUniforms {
    /// CPU reference of the fragment color at a local-space position.
    ///
    /// The WGSL fragment stages compute the same thing per pixel.
    pub fn shade(&self, local: Vec2) -> Rgb {
        match self.kind {
            MaterialKind::Solid => self.color,
            MaterialKind::Stripes => {
                if stripe_phase(local, self.stripe_frequency) < 0.5 {
                    self.stripe_color
                } else {
                    self.color
                }
            }
            MaterialKind::Pulse => pulse_color(self.color, self.time),
        }
    }
}

/// `fract(mix(x, y, 0.5) * frequency)`.
pub fn stripe_phase(local: Vec2, frequency: f32) -> f32 {
    let li = local.x + (local.y - local.x) * 0.5;
    fract(li * frequency)
}

/// Heartbeat blend: `lerp(base, (1, 0.5 + 0.5·sin t, 1), fract t)`.
pub fn pulse_color(base: Rgb, t: f32) -> Rgb {
    let beat = Rgb::new(1.0, 0.5 + 0.5 * t.sin(), 1.0);
    base.lerp(beat, fract(t))
}

/// GLSL/WGSL `fract`: `x - floor(x)`.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}
