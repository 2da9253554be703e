//! 2D view state: pan offset, zoom scale, and the derived field of view

use std::f32::consts::PI;
use tess4d_input::ViewControl;

/// Pan/zoom state for the wireframe viewport
pub struct View {
    /// Screen-space scale in pixels per projected unit
    pub scale: f32,
    /// Pan offset in projected units, applied before scaling
    pub offset_x: f32,
    pub offset_y: f32,

    initial_scale: f32,
    zoom_step: f32,
    fov_factor: f32,
}

impl View {
    pub fn new(initial_scale: f32, zoom_step: f32, fov_factor: f32) -> Self {
        Self {
            scale: initial_scale,
            offset_x: 0.0,
            offset_y: 0.0,
            initial_scale,
            zoom_step,
            fov_factor,
        }
    }

    /// Field of view for the perspective projection.
    ///
    /// Derived from the current zoom scale: zooming in narrows the FOV at
    /// the same time as it enlarges the screen-space mapping, so the two
    /// effects compound.
    pub fn fov(&self) -> f32 {
        PI / self.scale * self.fov_factor
    }
}

impl ViewControl for View {
    fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    fn zoom(&mut self, zoom_in: bool) {
        if zoom_in {
            self.scale *= self.zoom_step;
        } else {
            self.scale /= self.zoom_step;
        }
    }

    fn reset(&mut self) {
        self.scale = self.initial_scale;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_zoom_steps() {
        let mut view = View::new(100.0, 1.1, 7.0);

        view.zoom(true);
        assert!((view.scale - 110.0).abs() < EPSILON);

        view.zoom(false);
        assert!((view.scale - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut view = View::new(100.0, 1.1, 7.0);

        view.pan(0.5, -0.25);
        view.pan(0.5, -0.25);

        assert!((view.offset_x - 1.0).abs() < EPSILON);
        assert!((view.offset_y + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut view = View::new(100.0, 1.1, 7.0);

        view.zoom(true);
        view.zoom(true);
        view.pan(3.0, 4.0);
        view.reset();

        assert_eq!(view.scale, 100.0);
        assert_eq!(view.offset_x, 0.0);
        assert_eq!(view.offset_y, 0.0);
    }

    #[test]
    fn test_fov_tracks_scale() {
        let mut view = View::new(100.0, 1.1, 7.0);
        let wide = view.fov();

        // Zooming in narrows the field of view
        for _ in 0..5 {
            view.zoom(true);
        }
        let narrow = view.fov();

        assert!(narrow < wide);
        assert!((wide - PI / 100.0 * 7.0).abs() < EPSILON);
    }
}
