//! CPU evaluation of the fragment stages.
//!
//! Mirrors [`crate::render::fragments`] pixel for pixel so frames can be
//! produced without a GPU (CLI snapshots) and shading properties can be
//! checked in tests. Fragment coordinates follow `gl_FragCoord`: origin at
//! the bottom-left corner, pixel centers at half-integers.

use crate::color::Rgba;
use crate::config::{SessionConfig, Variant};
use crate::pointer::PointerState;
use crate::surface::SurfaceSize;
use glam::Vec2;

/// Color of the static variant's fragment stage.
pub fn solid_color() -> Rgba {
    Rgba::CORNFLOWER_BLUE
}

/// Color of the interactive fragment stage at `frag_coord`.
///
/// The red channel is `distance / diagonal` and is left unclamped, as the
/// shader output is; quantization clamps it.
pub fn gradient_color(frag_coord: Vec2, pointer: &PointerState, min_diagonal: f32) -> Rgba {
    let t = frag_coord.distance(pointer.position()) / pointer.uniform_diagonal(min_diagonal);
    Rgba::opaque(t, 0.0, 0.0)
}

/// Fragment coordinate of the pixel at (`col`, `row`), rows counted from the top.
///
/// `row` must lie inside the surface.
pub(crate) fn frag_coord(col: u32, row: u32, surface: SurfaceSize) -> Vec2 {
    debug_assert!(
        row < surface.height(),
        "row {row} outside surface of height {}",
        surface.height()
    );
    let y = surface.height() - 1 - row;
    Vec2::new(col as f32 + 0.5, y as f32 + 0.5)
}

/// Shades every pixel of `surface` into an RGBA8 buffer, top row first.
///
/// The triangle covers the whole viewport, so the clear color never shows.
/// The buffer length is `width * height * 4`.
pub fn rasterize(config: &SessionConfig, surface: SurfaceSize, pointer: &PointerState) -> Vec<u8> {
    let (w, h) = (surface.width(), surface.height());
    (0..h)
        .flat_map(|row| (0..w).map(move |col| (col, row)))
        .flat_map(|(col, row)| {
            let color = match config.variant {
                Variant::Static => solid_color(),
                Variant::Interactive => gradient_color(
                    frag_coord(col, row, surface),
                    pointer,
                    config.min_diagonal,
                ),
            };
            color.to_rgba8()
        })
        .collect()
}
