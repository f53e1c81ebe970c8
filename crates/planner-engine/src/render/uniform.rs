use bytemuck::{Pod, Zeroable};

use crate::scene::DrawCall;

/// Per-draw uniform block shared by every material pipeline (112 bytes).
///
///  offset   0  model         mat4x4<f32>  row-major rows become WGSL columns
///  offset  64  color         vec4<f32>
///  offset  80  stripe_color  vec4<f32>
///  offset  96  params        vec4<f32>    x frequency, y time, z selected
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct DrawUniform {
    pub model: [f32; 16],
    pub color: [f32; 4],
    pub stripe_color: [f32; 4],
    pub params: [f32; 4],
}

impl DrawUniform {
    pub const SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

    pub fn from_call(call: &DrawCall) -> Self {
        let u = &call.uniforms;
        Self {
            model: call.model.to_gpu_array(),
            color: u.color.to_array4(),
            stripe_color: u.stripe_color.to_array4(),
            params: [
                u.stripe_frequency,
                u.time,
                if u.selected { 1.0 } else { 0.0 },
                0.0,
            ],
        }
    }
}

/// Distance between consecutive uniform slots in the dynamic buffer.
pub(crate) fn uniform_stride(alignment: u32) -> u64 {
    let align = u64::from(alignment.max(1));
    DrawUniform::SIZE.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Mat4, Rgb};
    use crate::scene::{GeometryKey, Material};

    #[test]
    fn layout_is_112_bytes() {
        assert_eq!(DrawUniform::SIZE, 112);
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(16), 112);
        assert_eq!(uniform_stride(64), 128);
        assert_eq!(uniform_stride(0), 112);
    }

    #[test]
    fn params_pack_frequency_time_and_selection() {
        let call = DrawCall {
            geometry: GeometryKey::default(),
            uniforms: Material::narrow_cyan_stripes(Rgb::new(1.0, 0.5, 0.0)).apply(true, 2.0),
            model: Mat4::translation(0.25, -0.5),
        };
        let u = DrawUniform::from_call(&call);
        assert_eq!(u.params, [5.0, 0.0, 1.0, 0.0]);
        assert_eq!(u.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(u.stripe_color, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!((u.model[12], u.model[13]), (0.25, -0.5));
    }
}
