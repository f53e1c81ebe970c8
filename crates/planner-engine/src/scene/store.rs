use slotmap::SlotMap;

use crate::coords::Vec2;

use super::layout::DEFAULT_LAYOUT;
use super::{
    Camera, DrawSink, Entity, EntitySeed, Geometry, GeometryKey, Material, MaterialKey, Mesh,
    MeshKey, SceneError,
};

/// Owner of every geometry, material, mesh and entity.
///
/// Resources live in arenas with stable keys, so removing one never shifts
/// another. Entities are kept in a plain ordered list; list order is paint
/// order.
#[derive(Debug, Default)]
pub struct Scene {
    geometries: SlotMap<GeometryKey, Geometry>,
    materials: SlotMap<MaterialKey, Material>,
    meshes: SlotMap<MeshKey, Mesh>,
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene populated with [`DEFAULT_LAYOUT`].
    pub fn build_initial_layout() -> Self {
        Self::from_layout(&DEFAULT_LAYOUT)
    }

    /// Scene with one entity per seed, in seed order.
    ///
    /// Every seed gets its own geometry, material and mesh.
    pub fn from_layout(seeds: &[EntitySeed]) -> Self {
        let mut scene = Self::new();
        for seed in seeds {
            scene.spawn_seed(seed);
        }
        log::debug!("scene built with {} entities", scene.len());
        scene
    }

    /// Appends an entity built from `seed` and returns its index.
    pub fn spawn_seed(&mut self, seed: &EntitySeed) -> usize {
        let geometry = self.add_geometry(Geometry::from_kind(seed.geometry));
        let material = self.add_material(seed.material);
        let mesh = self.meshes.insert(Mesh::new(geometry, material));
        self.entities.push(Entity::new(mesh, seed.position, seed.scale, seed.orientation));
        self.entities.len() - 1
    }

    // ── resources ─────────────────────────────────────────────────────────

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Pairs an existing geometry with an existing material.
    pub fn add_mesh(
        &mut self,
        geometry: GeometryKey,
        material: MaterialKey,
    ) -> Result<MeshKey, SceneError> {
        if !self.geometries.contains_key(geometry) {
            return Err(SceneError::UnknownGeometry);
        }
        if !self.materials.contains_key(material) {
            return Err(SceneError::UnknownMaterial);
        }
        Ok(self.meshes.insert(Mesh::new(geometry, material)))
    }

    /// Appends an entity drawing `mesh` and returns its index.
    pub fn spawn(
        &mut self,
        mesh: MeshKey,
        position: Vec2,
        scale: Vec2,
        orientation_degrees: f32,
    ) -> Result<usize, SceneError> {
        if !self.meshes.contains_key(mesh) {
            return Err(SceneError::UnknownMesh);
        }
        self.entities.push(Entity::new(mesh, position, scale, orientation_degrees));
        Ok(self.entities.len() - 1)
    }

    pub fn geometry(&self, key: GeometryKey) -> Option<&Geometry> {
        self.geometries.get(key)
    }

    pub fn material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    pub fn mesh(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    /// Iterates live geometries with their keys.
    pub fn geometries(&self) -> impl Iterator<Item = (GeometryKey, &Geometry)> {
        self.geometries.iter()
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // ── entities ──────────────────────────────────────────────────────────

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Geometry and material an entity draws with.
    pub fn resolve(&self, entity: &Entity) -> Option<(&Geometry, &Material)> {
        let mesh = self.meshes.get(entity.mesh())?;
        Some((self.geometries.get(mesh.geometry())?, self.materials.get(mesh.material())?))
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Index of the entity whose base position lies within `radius` of `point`.
    ///
    /// When several qualify the last one wins, which is the one painted on top.
    pub fn pick(&self, point: Vec2, radius: f32) -> Option<usize> {
        self.entities
            .iter()
            .rposition(|e| e.base_position().distance(point) <= radius)
    }

    pub fn deselect_all(&mut self) {
        for e in &mut self.entities {
            e.set_selected(false);
        }
    }

    /// Deselects everything, then selects `index` if it is in range.
    pub fn select_only(&mut self, index: Option<usize>) {
        self.deselect_all();
        if let Some(e) = index.and_then(|i| self.entities.get_mut(i)) {
            e.set_selected(true);
        }
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().filter(|e| e.is_selected())
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Submits every entity in list order.
    pub fn draw_all(&self, camera: &Camera, elapsed: f32, sink: &mut dyn DrawSink) {
        for entity in &self.entities {
            let Some(mesh) = self.meshes.get(entity.mesh()) else {
                log::warn!("entity references a released mesh; skipping");
                continue;
            };
            let Some(material) = self.materials.get(mesh.material()) else {
                log::warn!("mesh references a released material; skipping");
                continue;
            };
            entity.draw(mesh, material, camera, elapsed, sink);
        }
    }

    /// Removes every selected entity in one pass.
    ///
    /// Meshes left without entities are released, then geometries and materials
    /// left without meshes. Returns the number of entities removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.entities.len();
        let mut released = Vec::new();
        self.entities.retain(|e| {
            if e.is_selected() {
                released.push(e.mesh());
                false
            } else {
                true
            }
        });

        let removed = before - self.entities.len();
        if removed == 0 {
            return 0;
        }

        for key in released {
            if self.entities.iter().any(|e| e.mesh() == key) {
                continue;
            }
            let Some(mesh) = self.meshes.remove(key) else { continue };
            if !self.meshes.values().any(|m| m.geometry() == mesh.geometry()) {
                self.geometries.remove(mesh.geometry());
            }
            if !self.meshes.values().any(|m| m.material() == mesh.material()) {
                self.materials.remove(mesh.material());
            }
        }

        log::info!("deleted {removed} selected entit{}", if removed == 1 { "y" } else { "ies" });
        removed
    }
}
