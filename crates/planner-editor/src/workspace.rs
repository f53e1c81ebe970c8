use planner_engine::scene::{Camera, DrawSink, EntitySeed, Scene};

/// Everything the editor mutates: the scene and the camera looking at it.
#[derive(Debug, Default)]
pub struct Workspace {
    pub scene: Scene,
    pub camera: Camera,
}

impl Workspace {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self { scene, camera }
    }

    pub fn from_layout(seeds: &[EntitySeed], camera: Camera) -> Self {
        Self::new(Scene::from_layout(seeds), camera)
    }

    /// Submits the scene as seen through the camera.
    pub fn draw(&self, elapsed: f32, sink: &mut dyn DrawSink) {
        self.scene.draw_all(&self.camera, elapsed, sink);
    }
}
