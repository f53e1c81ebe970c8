use std::collections::HashSet;

use planner_engine::coords::{Vec2, Viewport};
use planner_engine::core::AppControl;
use planner_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use planner_engine::scene::CameraInput;

use crate::bindings::KeyBindings;
use crate::workspace::Workspace;

pub const DEFAULT_PICK_RADIUS: f32 = 0.3;

/// Pointer gesture in normalized coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Primary button down, no motion yet.
    Pressed { start: Vec2 },
    Dragging { start: Vec2, offset: Vec2 },
}

/// Turns input events into scene edits.
///
/// Selection, dragging and deletion happen as events arrive; held keys act
/// once per [`tick`](Self::tick).
#[derive(Debug)]
pub struct InteractionController {
    bindings: KeyBindings,
    pick_radius: f32,
    viewport: Viewport,
    gesture: Gesture,
    /// Keys currently down; cleared on focus loss.
    held: HashSet<Key>,
}

impl InteractionController {
    pub fn new(bindings: KeyBindings, pick_radius: f32) -> Self {
        Self {
            bindings,
            pick_radius,
            viewport: Viewport::default(),
            gesture: Gesture::Idle,
            held: HashSet::new(),
        }
    }

    /// Logical window size used to normalize pointer positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn handle_event(&mut self, event: &InputEvent, ws: &mut Workspace) -> AppControl {
        match *event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
            }) => match state {
                MouseButtonState::Pressed => self.pointer_pressed(x, y, ws),
                MouseButtonState::Released => self.pointer_released(ws),
            },
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => self.pointer_moved(x, y, ws),
            InputEvent::Key { key, state: KeyState::Pressed, .. } => return self.key_down(key),
            InputEvent::Key { key, state: KeyState::Released, .. } => self.key_up(key, ws),
            InputEvent::Focused(false) => self.focus_lost(ws),
            _ => {}
        }
        AppControl::Continue
    }

    // ── pointer ───────────────────────────────────────────────────────────

    /// Selects the entity nearest-on-top within the pick radius, or nothing.
    ///
    /// Ignored while the viewport has no area (minimized window).
    pub fn pointer_pressed(&mut self, x: f32, y: f32, ws: &mut Workspace) {
        if !self.viewport.is_valid() {
            log::debug!("press ignored: viewport has no area");
            return;
        }

        // A press without a matching release (lost to another window) ends the old gesture.
        if self.gesture != Gesture::Idle {
            self.pointer_released(ws);
        }

        let p = self.viewport.to_normalized(x, y);
        let hit = ws.scene.pick(p, self.pick_radius);
        ws.scene.select_only(hit);
        match hit {
            Some(i) => log::debug!("selected entity {i} at ({:.3}, {:.3})", p.x, p.y),
            None => log::debug!("press at ({:.3}, {:.3}) selected nothing", p.x, p.y),
        }
        self.gesture = Gesture::Pressed { start: p };
    }

    /// Moves every selected entity by the offset from the press point.
    pub fn pointer_moved(&mut self, x: f32, y: f32, ws: &mut Workspace) {
        if !self.viewport.is_valid() {
            return;
        }
        let start = match self.gesture {
            Gesture::Idle => return,
            Gesture::Pressed { start } | Gesture::Dragging { start, .. } => start,
        };
        let offset = self.viewport.to_normalized(x, y) - start;
        for e in ws.scene.selected_mut() {
            e.set_drag_offset(offset);
        }
        self.gesture = Gesture::Dragging { start, offset };
    }

    /// Folds the drag into the selected entities' base positions.
    pub fn pointer_released(&mut self, ws: &mut Workspace) {
        let offset = match self.gesture {
            Gesture::Idle => return,
            Gesture::Pressed { .. } => Vec2::zero(),
            Gesture::Dragging { offset, .. } => offset,
        };
        for e in ws.scene.selected_mut() {
            e.commit_drag(offset);
        }
        if offset != Vec2::zero() {
            log::debug!("drag committed by ({:.3}, {:.3})", offset.x, offset.y);
        }
        self.gesture = Gesture::Idle;
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    pub fn key_down(&mut self, key: Key) -> AppControl {
        self.held.insert(key);
        if self.bindings.is_quit(key) {
            log::info!("quit requested");
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    pub fn key_up(&mut self, key: Key, ws: &mut Workspace) {
        self.held.remove(&key);
        if self.bindings.is_delete(key) {
            ws.scene.delete_selected();
        }
    }

    /// Clears held keys and ends any drag; releases never reach an unfocused window.
    pub fn focus_lost(&mut self, ws: &mut Workspace) {
        self.held.clear();
        self.pointer_released(ws);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    pub fn camera_input(&self) -> CameraInput {
        self.bindings.camera_input(&self.held)
    }

    /// Applies held camera and rotation controls for `dt` seconds.
    pub fn tick(&mut self, dt: f32, ws: &mut Workspace) {
        let dt = dt.abs();
        ws.camera.pan_zoom(dt, &self.camera_input());

        let sign = self.bindings.rotation_sign(&self.held);
        if sign == 0.0 {
            return;
        }
        for e in ws.scene.selected_mut() {
            e.accumulate_rotation(dt, sign);
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(KeyBindings::default(), DEFAULT_PICK_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_engine::coords::Rgb;
    use planner_engine::scene::{Camera, EntitySeed, GeometryKind, Material};

    const SIZE: f32 = 512.0;

    fn controller() -> InteractionController {
        let mut c = InteractionController::default();
        c.set_viewport(Viewport::new(SIZE, SIZE));
        c
    }

    fn seed(x: f32, y: f32) -> EntitySeed {
        EntitySeed::new(
            GeometryKind::Triangle,
            Material::solid(Rgb::red()),
            Vec2::new(x, y),
            Vec2::splat(0.5),
            0.0,
        )
    }

    fn workspace(points: &[(f32, f32)]) -> Workspace {
        let seeds: Vec<EntitySeed> = points.iter().map(|&(x, y)| seed(x, y)).collect();
        Workspace::from_layout(&seeds, Camera::default())
    }

    /// Pixel position of a normalized point in a `SIZE`² window.
    fn px(x: f32, y: f32) -> (f32, f32) {
        ((x * 0.5 + 0.5) * SIZE, (0.5 - y * 0.5) * SIZE)
    }

    fn press(x: f32, y: f32) -> InputEvent {
        let (x, y) = px(x, y);
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release(x: f32, y: f32) -> InputEvent {
        let (x, y) = px(x, y);
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        let (x, y) = px(x, y);
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn press_selects_latest_entity_in_radius() {
        let mut ws = workspace(&[(0.0, 0.0), (0.2, 0.2)]);
        let mut c = controller();
        c.handle_event(&press(0.05, 0.05), &mut ws);
        assert_eq!(ws.scene.selected_indices(), vec![1]);
    }

    #[test]
    fn press_on_empty_space_clears_selection() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();
        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&release(0.0, 0.0), &mut ws);
        c.handle_event(&press(0.9, 0.9), &mut ws);
        assert!(ws.scene.selected_indices().is_empty());
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();
        let (x, y) = px(0.0, 0.0);
        c.handle_event(
            &InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x,
                y,
            }),
            &mut ws,
        );
        assert_eq!(c.gesture(), Gesture::Idle);
        assert!(ws.scene.selected_indices().is_empty());
    }

    #[test]
    fn press_on_minimized_viewport_is_ignored() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();
        c.set_viewport(Viewport::new(0.0, 0.0));
        c.pointer_pressed(10.0, 10.0, &mut ws);

        assert_eq!(c.gesture(), Gesture::Idle);
        assert!(ws.scene.selected_indices().is_empty());
    }

    #[test]
    fn drag_holds_still_while_minimized() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();
        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&moved(0.25, 0.0), &mut ws);

        c.set_viewport(Viewport::new(0.0, 0.0));
        c.pointer_moved(100.0, 100.0, &mut ws);
        assert_eq!(ws.scene.entities()[0].drag_offset(), Vec2::new(0.25, 0.0));
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn drag_round_trip_moves_base_position() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();

        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&moved(0.125, -0.25), &mut ws);
        c.handle_event(&moved(0.25, 0.25), &mut ws);

        let e = &ws.scene.entities()[0];
        assert_eq!(e.drag_offset(), Vec2::new(0.25, 0.25));
        assert_eq!(e.base_position(), Vec2::zero());
        assert_eq!(e.position(), Vec2::new(0.25, 0.25));

        c.handle_event(&release(0.25, 0.25), &mut ws);
        let e = &ws.scene.entities()[0];
        assert_eq!(e.base_position(), Vec2::new(0.25, 0.25));
        assert_eq!(e.drag_offset(), Vec2::zero());
        assert_eq!(c.gesture(), Gesture::Idle);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        ws.scene.select_only(Some(0));
        let mut c = controller();
        c.handle_event(&moved(0.5, 0.5), &mut ws);
        assert_eq!(ws.scene.entities()[0].drag_offset(), Vec2::zero());
    }

    #[test]
    fn drag_only_moves_the_selection() {
        let mut ws = workspace(&[(0.0, 0.0), (0.75, 0.75)]);
        let mut c = controller();
        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&moved(-0.5, 0.0), &mut ws);
        c.handle_event(&release(-0.5, 0.0), &mut ws);

        assert_eq!(ws.scene.entities()[0].base_position(), Vec2::new(-0.5, 0.0));
        assert_eq!(ws.scene.entities()[1].base_position(), Vec2::new(0.75, 0.75));
    }

    #[test]
    fn focus_loss_commits_in_flight_drag() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        let mut c = controller();
        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&moved(0.5, 0.0), &mut ws);
        c.handle_event(&InputEvent::Focused(false), &mut ws);

        assert_eq!(c.gesture(), Gesture::Idle);
        assert_eq!(ws.scene.entities()[0].base_position(), Vec2::new(0.5, 0.0));
        assert_eq!(ws.scene.entities()[0].drag_offset(), Vec2::zero());
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn delete_fires_on_key_up() {
        let mut ws = workspace(&[(0.0, 0.0), (0.75, 0.75)]);
        let mut c = controller();
        c.handle_event(&press(0.0, 0.0), &mut ws);
        c.handle_event(&release(0.0, 0.0), &mut ws);

        c.handle_event(&key(Key::Delete, KeyState::Pressed), &mut ws);
        assert_eq!(ws.scene.len(), 2);
        c.handle_event(&key(Key::Delete, KeyState::Released), &mut ws);
        assert_eq!(ws.scene.len(), 1);
        assert_eq!(ws.scene.entities()[0].base_position(), Vec2::new(0.75, 0.75));
    }

    #[test]
    fn backspace_also_deletes() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        ws.scene.select_only(Some(0));
        let mut c = controller();
        c.handle_event(&key(Key::Backspace, KeyState::Released), &mut ws);
        assert!(ws.scene.is_empty());
    }

    #[test]
    fn escape_requests_exit() {
        let mut ws = workspace(&[]);
        let mut c = controller();
        assert_eq!(c.handle_event(&key(Key::Escape, KeyState::Pressed), &mut ws), AppControl::Exit);
        assert_eq!(c.handle_event(&key(Key::Z, KeyState::Pressed), &mut ws), AppControl::Continue);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut ws = workspace(&[]);
        let mut c = controller();
        c.handle_event(&key(Key::Z, KeyState::Pressed), &mut ws);
        assert!(c.camera_input().zoom_in);
        c.handle_event(&InputEvent::Focused(false), &mut ws);
        assert!(!c.is_held(Key::Z));
        assert_eq!(c.camera_input(), CameraInput::default());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn held_rotation_accumulates_across_holds() {
        let mut ws = workspace(&[(0.0, 0.0)]);
        ws.scene.select_only(Some(0));
        let mut c = controller();

        c.key_down(Key::A);
        c.tick(0.25, &mut ws);
        assert_eq!(ws.scene.entities()[0].rotation_offset(), 50.0);

        c.key_up(Key::A, &mut ws);
        c.tick(0.25, &mut ws);
        assert_eq!(ws.scene.entities()[0].rotation_offset(), 50.0);

        c.key_down(Key::A);
        c.tick(0.125, &mut ws);
        assert_eq!(ws.scene.entities()[0].rotation_offset(), 75.0);

        c.key_up(Key::A, &mut ws);
        c.key_down(Key::D);
        c.tick(0.5, &mut ws);
        assert_eq!(ws.scene.entities()[0].rotation_offset(), -25.0);
    }

    #[test]
    fn rotation_ignores_unselected_entities() {
        let mut ws = workspace(&[(0.0, 0.0), (0.75, 0.75)]);
        ws.scene.select_only(Some(1));
        let mut c = controller();
        c.key_down(Key::A);
        c.tick(0.5, &mut ws);
        assert_eq!(ws.scene.entities()[0].rotation_offset(), 0.0);
        assert_eq!(ws.scene.entities()[1].rotation_offset(), 100.0);
    }

    #[test]
    fn negative_dt_is_treated_as_magnitude() {
        let mut ws = workspace(&[]);
        let mut c = controller();
        c.key_down(Key::L);
        c.tick(-0.5, &mut ws);
        assert_eq!(ws.camera.center, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn zoom_in_shrinks_both_extents() {
        let mut ws = workspace(&[]);
        let mut c = controller();
        c.key_down(Key::Z);
        c.tick(0.5, &mut ws);
        assert_eq!(ws.camera.half_width, 1.0);
        assert_eq!(ws.camera.half_height, 1.0);
    }
}
