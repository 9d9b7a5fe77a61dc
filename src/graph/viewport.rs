//! Zoomable, pannable view over a graph layout.
//!
//! The viewport starts fitted to the layout bounds. Zooming keeps the view
//! center fixed; panning moves it by a fraction of the visible span.

use crate::constants::{MAX_ZOOM, MIN_ZOOM, PAN_STEP, ZOOM_STEP};

use super::layout::Bounds;

/// Pan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Visible window in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    fit: Bounds,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// A viewport fitted to `bounds`.
    #[must_use]
    pub const fn fitted(bounds: Bounds) -> Self {
        Self {
            fit: bounds,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Multiply the zoom level by `factor`, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / ZOOM_STEP);
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let visible = self.visible();
        let step_x = visible.width() * PAN_STEP;
        let step_y = visible.height() * PAN_STEP;
        match direction {
            PanDirection::Left => self.offset_x -= step_x,
            PanDirection::Right => self.offset_x += step_x,
            PanDirection::Up => self.offset_y -= step_y,
            PanDirection::Down => self.offset_y += step_y,
        }
    }

    /// Back to the fitted view.
    pub fn reset(&mut self) {
        *self = Self::fitted(self.fit);
    }

    /// The currently visible window.
    #[must_use]
    pub fn visible(&self) -> Bounds {
        let (center_x, center_y) = self.fit.center();
        let half_width = self.fit.width() / 2.0 / self.zoom;
        let half_height = self.fit.height() / 2.0 / self.zoom;
        let center_x = center_x + self.offset_x;
        let center_y = center_y + self.offset_y;
        Bounds {
            min_x: center_x - half_width,
            max_x: center_x + half_width,
            min_y: center_y - half_height,
            max_y: center_y + half_height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fitted(Bounds::default())
    }
}
