use anyhow::Result;
use winit::dpi::LogicalSize;

use planner_engine::coords::{Rgb, Viewport};
use planner_engine::core::{App as EngineApp, AppControl, FrameCtx};
use planner_engine::device::GpuInit;
use planner_engine::input::InputEvent;
use planner_engine::render::SceneRenderer;
use planner_engine::scene::{Camera, DrawCall, EntitySeed, DEFAULT_LAYOUT};
use planner_engine::window::{Runtime, RuntimeConfig};

use crate::bindings::KeyBindings;
use crate::controller::{InteractionController, DEFAULT_PICK_RADIUS};
use crate::workspace::Workspace;

// ── EditorConfig ──────────────────────────────────────────────────────────

/// Startup settings for the editor window and scene.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub title: String,
    /// Logical pixels.
    pub width: f64,
    pub height: f64,
    pub clear: Rgb,
    pub bindings: KeyBindings,
    /// Normalized distance within which a press selects an entity.
    pub pick_radius: f32,
    pub camera: Camera,
    pub layout: Vec<EntitySeed>,
    pub gpu: GpuInit,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Event Planner".to_string(),
            width: 512.0,
            height: 512.0,
            clear: Rgb::black(),
            bindings: KeyBindings::default(),
            pick_radius: DEFAULT_PICK_RADIUS,
            camera: Camera::default(),
            layout: DEFAULT_LAYOUT.to_vec(),
            gpu: GpuInit::default(),
        }
    }
}

// ── Editor ────────────────────────────────────────────────────────────────

/// Editor builder: configure, then [`run`](Self::run).
///
/// ```rust,ignore
/// Editor::new()
///     .title("Event Planner")
///     .size(512.0, 512.0)
///     .run()?;
/// ```
pub struct Editor {
    config: EditorConfig,
}

impl Editor {
    pub fn new() -> Self {
        Self::from_config(EditorConfig::default())
    }

    pub fn from_config(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.config.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn clear_color(mut self, clear: Rgb) -> Self {
        self.config.clear = clear;
        self
    }

    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.config.bindings = bindings;
        self
    }

    pub fn pick_radius(mut self, radius: f32) -> Self {
        self.config.pick_radius = radius;
        self
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.config.camera = camera;
        self
    }

    /// Replaces the starting entities.
    pub fn layout(mut self, seeds: impl IntoIterator<Item = EntitySeed>) -> Self {
        self.config.layout = seeds.into_iter().collect();
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.config.gpu = gpu;
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Opens the window and runs until it closes or quit is pressed.
    pub fn run(self) -> Result<()> {
        let EditorConfig {
            title,
            width,
            height,
            gpu,
            ..
        } = self.config.clone();

        let runtime = RuntimeConfig {
            title,
            initial_size: LogicalSize::new(width, height),
            resizable: true,
        };
        let app = EditorApp::new(self.config);
        log::info!("editor starting with {} entities", app.workspace.scene.len());

        Runtime::run(runtime, gpu, app)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

// ── EditorApp ─────────────────────────────────────────────────────────────

/// Implements the engine `App` contract for the editor.
struct EditorApp {
    workspace: Workspace,
    controller: InteractionController,
    renderer: SceneRenderer,
    calls: Vec<DrawCall>,
    clear: Rgb,
}

impl EditorApp {
    fn new(config: EditorConfig) -> Self {
        Self {
            workspace: Workspace::from_layout(&config.layout, config.camera),
            controller: InteractionController::new(config.bindings, config.pick_radius),
            renderer: SceneRenderer::new(),
            calls: Vec::new(),
            clear: config.clear,
        }
    }

    /// One frame of editing without the GPU: events in order, then the
    /// tick, then the draw list.
    fn step(&mut self, events: &[InputEvent], viewport: Viewport, dt: f32, elapsed: f32) -> AppControl {
        self.controller.set_viewport(viewport);
        for ev in events {
            if self.controller.handle_event(ev, &mut self.workspace) == AppControl::Exit {
                return AppControl::Exit;
            }
        }
        self.controller.tick(dt, &mut self.workspace);

        self.calls.clear();
        self.workspace.draw(elapsed, &mut self.calls);
        AppControl::Continue
    }
}

impl EngineApp for EditorApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let control = self.step(
            &ctx.input_frame.events,
            ctx.window.viewport(),
            ctx.time.dt,
            ctx.time.elapsed,
        );
        if control == AppControl::Exit {
            return control;
        }

        let renderer = &mut self.renderer;
        let scene = &self.workspace.scene;
        let calls = &self.calls;
        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, scene, calls);
        })
    }
}
