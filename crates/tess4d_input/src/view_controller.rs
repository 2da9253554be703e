//! View controller for mouse-driven pan, zoom, and rotation
//!
//! Controls:
//! - Left-drag: pan
//! - Right-drag: rotate in the XZ/YZ planes
//! - Ctrl + right-drag: rotate in the XW/YW planes
//! - Mouse wheel: zoom

use tess4d_math::{RotationAngles, RotationPair};
use winit::event::{ElementState, MouseButton};

/// Interface the controller drives on the view state
pub trait ViewControl {
    fn pan(&mut self, dx: f32, dy: f32);
    fn zoom(&mut self, zoom_in: bool);
    fn reset(&mut self);
    fn scale(&self) -> f32;
}

/// Translates cursor, button, and wheel events into view commands
pub struct ViewController {
    // Drag state
    last_cursor: Option<(f32, f32)>,
    left_held: bool,
    right_held: bool,
    ctrl_held: bool,

    // Persisted rotation deltas. A drag only overwrites the pair it selects;
    // the other pair keeps its last values until reset.
    angles: RotationAngles,

    // Configuration
    pub rotation_sensitivity: f32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            left_held: false,
            right_held: false,
            ctrl_held: false,
            angles: RotationAngles::ZERO,
            rotation_sensitivity: 0.25,
        }
    }

    pub fn with_rotation_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotation_sensitivity = sensitivity;
        self
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => {
                self.left_held = pressed;
            }
            MouseButton::Right => {
                self.right_held = pressed;
            }
            _ => {}
        }
    }

    /// Process keyboard modifier changes
    pub fn process_modifiers(&mut self, ctrl_held: bool) {
        self.ctrl_held = ctrl_held;
    }

    /// The plane pair a rotation drag currently updates
    pub fn active_pair(&self) -> RotationPair {
        if self.ctrl_held {
            RotationPair::AnaKata
        } else {
            RotationPair::Spatial
        }
    }

    /// Process cursor movement against the view state.
    ///
    /// A left drag pans the view. A right drag updates the active pair's
    /// deltas and returns the full angle set for application to the model.
    /// Cursor deltas are divided by the current scale so dragging tracks the
    /// projected geometry at any zoom level.
    pub fn process_cursor_moved<V: ViewControl>(
        &mut self,
        x: f32,
        y: f32,
        view: &mut V,
    ) -> Option<RotationAngles> {
        let Some((last_x, last_y)) = self.last_cursor.replace((x, y)) else {
            return None;
        };

        let dx = x - last_x;
        let dy = y - last_y;

        if self.left_held {
            let scale = view.scale();
            view.pan(dx / scale, dy / scale);
            None
        } else if self.right_held {
            let scale = view.scale();
            let ax = dx / scale * self.rotation_sensitivity;
            let ay = dy / scale * self.rotation_sensitivity;

            match self.active_pair() {
                RotationPair::Spatial => {
                    self.angles.xz = ax;
                    self.angles.yz = ay;
                }
                RotationPair::AnaKata => {
                    self.angles.xw = ax;
                    self.angles.yw = ay;
                }
            }

            Some(self.angles)
        } else {
            None
        }
    }

    /// Process mouse wheel input: one zoom step per event
    pub fn process_scroll<V: ViewControl>(&mut self, delta: f32, view: &mut V) {
        view.zoom(delta > 0.0);
    }

    /// Current rotation deltas
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    /// Zero all rotation deltas
    pub fn reset(&mut self) {
        self.angles = RotationAngles::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    /// Minimal view-state double for exercising the controller
    struct TestView {
        scale: f32,
        offset: (f32, f32),
        zoom_steps: i32,
    }

    impl TestView {
        fn new(scale: f32) -> Self {
            Self { scale, offset: (0.0, 0.0), zoom_steps: 0 }
        }
    }

    impl ViewControl for TestView {
        fn pan(&mut self, dx: f32, dy: f32) {
            self.offset.0 += dx;
            self.offset.1 += dy;
        }

        fn zoom(&mut self, zoom_in: bool) {
            self.zoom_steps += if zoom_in { 1 } else { -1 };
        }

        fn reset(&mut self) {
            self.offset = (0.0, 0.0);
        }

        fn scale(&self) -> f32 {
            self.scale
        }
    }

    #[test]
    fn test_first_move_only_records_position() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        let result = controller.process_cursor_moved(10.0, 20.0, &mut view);

        assert_eq!(result, None);
        assert_eq!(view.offset, (0.0, 0.0));
    }

    #[test]
    fn test_left_drag_pans_scaled() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        controller.process_cursor_moved(50.0, -30.0, &mut view);

        assert!((view.offset.0 - 0.5).abs() < EPSILON);
        assert!((view.offset.1 + 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_move_without_buttons_does_nothing() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_cursor_moved(0.0, 0.0, &mut view);
        let result = controller.process_cursor_moved(40.0, 40.0, &mut view);

        assert_eq!(result, None);
        assert_eq!(view.offset, (0.0, 0.0));
    }

    #[test]
    fn test_right_drag_rotates_spatial_pair() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        let angles = controller.process_cursor_moved(40.0, 80.0, &mut view).unwrap();

        // 40 / 100 * 0.25 = 0.1, 80 / 100 * 0.25 = 0.2
        assert!((angles.xz - 0.1).abs() < EPSILON);
        assert!((angles.yz - 0.2).abs() < EPSILON);
        assert_eq!(angles.xw, 0.0);
        assert_eq!(angles.yw, 0.0);
    }

    #[test]
    fn test_ctrl_selects_ana_kata_pair() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_modifiers(true);
        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        let angles = controller.process_cursor_moved(40.0, 80.0, &mut view).unwrap();

        assert_eq!(angles.xz, 0.0);
        assert_eq!(angles.yz, 0.0);
        assert!((angles.xw - 0.1).abs() < EPSILON);
        assert!((angles.yw - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_inactive_pair_keeps_stale_deltas() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        // Plain right-drag sets the spatial pair
        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        controller.process_cursor_moved(40.0, 0.0, &mut view);

        // A later Ctrl-drag returns the new ana/kata deltas AND the stale
        // spatial deltas
        controller.process_modifiers(true);
        let angles = controller.process_cursor_moved(60.0, 0.0, &mut view).unwrap();

        assert!((angles.xz - 0.1).abs() < EPSILON);
        assert!((angles.xw - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_reset_zeroes_all_deltas() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        controller.process_cursor_moved(40.0, 40.0, &mut view);

        controller.reset();

        assert_eq!(controller.angles(), RotationAngles::ZERO);
    }

    #[test]
    fn test_scroll_zooms_one_step_per_event() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_scroll(3.0, &mut view);
        assert_eq!(view.zoom_steps, 1);

        controller.process_scroll(-0.5, &mut view);
        assert_eq!(view.zoom_steps, 0);
    }

    #[test]
    fn test_release_stops_pan() {
        let mut controller = ViewController::new();
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        controller.process_cursor_moved(50.0, 50.0, &mut view);

        assert_eq!(view.offset, (0.0, 0.0));
    }

    #[test]
    fn test_custom_sensitivity() {
        let mut controller = ViewController::new().with_rotation_sensitivity(0.5);
        let mut view = TestView::new(100.0);

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_cursor_moved(0.0, 0.0, &mut view);
        let angles = controller.process_cursor_moved(40.0, 0.0, &mut view).unwrap();

        assert!((angles.xz - 0.2).abs() < EPSILON);
    }
}
