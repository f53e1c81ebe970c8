use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::scene::{Geometry, GeometryKey, Scene};

/// Vertex and index buffers for one uploaded geometry.
pub(crate) struct GpuMesh {
    pub vbo: wgpu::Buffer,
    pub ibo: wgpu::Buffer,
    pub index_count: u32,
}

/// GPU copies of scene geometry, keyed like the scene's arena.
///
/// Geometry is immutable once added, so each key is uploaded once and dropped
/// when the key disappears from the scene.
#[derive(Default)]
pub(crate) struct MeshCache {
    meshes: HashMap<GeometryKey, GpuMesh>,
}

impl MeshCache {
    pub fn sync(&mut self, device: &wgpu::Device, scene: &Scene) {
        let before = self.meshes.len();
        self.meshes.retain(|key, _| scene.geometry(*key).is_some());
        let pruned = before - self.meshes.len();
        if pruned > 0 {
            log::debug!("released {pruned} geometry buffers");
        }

        for (key, geometry) in scene.geometries() {
            if self.meshes.contains_key(&key) {
                continue;
            }
            self.meshes.insert(key, upload(device, geometry));
        }
    }

    pub fn get(&self, key: GeometryKey) -> Option<&GpuMesh> {
        self.meshes.get(&key)
    }
}

fn upload(device: &wgpu::Device, geometry: &Geometry) -> GpuMesh {
    let positions = geometry.positions();
    let indices = geometry.triangle_indices();

    let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("planner geometry vbo"),
        contents: bytemuck::cast_slice(&positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("planner geometry ibo"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    GpuMesh {
        vbo,
        ibo,
        index_count: indices.len() as u32,
    }
}

pub(crate) const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
    0 => Float32x2 // local position
];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}
