//! Drawing-surface dimensions.

use crate::error::LumenError;
use serde::Serialize;

/// Width and height of the drawing surface in pixels. Both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    /// Creates a surface size.
    ///
    /// Returns `LumenError::InvalidDimensions` if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, LumenError> {
        if width == 0 || height == 0 {
            return Err(LumenError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of the surface diagonal, `sqrt(w² + h²)`.
    pub fn diagonal(&self) -> f32 {
        (self.width as f32).hypot(self.height as f32)
    }

    /// Viewport extent as the signed pair GL viewport calls take.
    pub fn viewport(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}
