//! Browser host for the lumen shader demo.
//!
//! JavaScript calls `start(canvas, configJson)` once. The host sizes the
//! canvas to the window, obtains a WebGL2 context, wires `mousemove` and
//! `resize` listeners into the frame loop's input queue and drives the
//! loop from `requestAnimationFrame`.

use lumen_core::{LumenError, SurfaceSize};

#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use host::start;

/// Converts the window's CSS inner size to a canvas size in pixels.
///
/// Fractional sizes are truncated. Returns `LumenError::InvalidDimensions`
/// for a collapsed or non-finite window.
pub fn window_surface(inner_width: f64, inner_height: f64) -> Result<SurfaceSize, LumenError> {
    let to_px = |v: f64| {
        if v.is_finite() && v >= 1.0 {
            Ok(v.min(u32::MAX as f64) as u32)
        } else {
            Err(LumenError::InvalidDimensions)
        }
    };
    SurfaceSize::new(to_px(inner_width)?, to_px(inner_height)?)
}
