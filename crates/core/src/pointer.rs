//! Pointer state feeding the interactive fragment stage.
//!
//! Pointer events arrive in the input coordinate space (origin top-left,
//! y down). The fragment stage compares against `gl_FragCoord`, whose
//! origin is bottom-left, so positions are flipped on the way in.

use crate::surface::SurfaceSize;
use glam::Vec2;
use serde::Serialize;

/// Default lower bound for the diagonal pushed to the shader.
///
/// Before any pointer event the stored diagonal is 0; dividing by it in the
/// fragment stage is undefined, so the uniform is clamped to this value.
pub const MIN_DIAGONAL: f32 = 1.0;

/// One pointer-move sample in surface-local, top-left-origin coordinates,
/// together with the surface size at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub surface: SurfaceSize,
}

/// Latest pointer sample in bottom-left-origin coordinates.
///
/// Only the most recent event matters; no history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PointerState {
    position: Vec2,
    diagonal: f32,
}

impl PointerState {
    /// Zero-initialized state: position `(0, 0)`, diagonal `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-move event, replacing the previous sample.
    pub fn apply(&mut self, event: &PointerEvent) {
        self.position = to_surface_coords(event.x, event.y, event.surface);
        self.diagonal = event.surface.diagonal();
    }

    /// Pointer position with the origin at the bottom-left of the surface.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Surface diagonal as of the latest event, 0 before any event.
    pub fn diagonal(&self) -> f32 {
        self.diagonal
    }

    /// Diagonal value to push to the shader, never below `min_diagonal`.
    pub fn uniform_diagonal(&self, min_diagonal: f32) -> f32 {
        self.diagonal.max(min_diagonal)
    }
}

/// Converts a top-left-origin event position to bottom-left origin.
pub fn to_surface_coords(x: f32, y: f32, surface: SurfaceSize) -> Vec2 {
    Vec2::new(x, surface.height() as f32 - y)
}
