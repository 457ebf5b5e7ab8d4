//! PNG snapshots of CPU-shaded frames.

use crate::error::CliError;
use lumen_core::shade::rasterize;
use lumen_core::{PointerState, SessionConfig, SurfaceSize};
use std::path::Path;

/// Shades one frame for `config` on `surface` and writes it as a PNG.
pub fn write_png(
    config: &SessionConfig,
    surface: SurfaceSize,
    pointer: &PointerState,
    path: &Path,
) -> Result<(), CliError> {
    let rgba = rasterize(config, surface, pointer);
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), rgba)
        .ok_or_else(|| CliError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| CliError::Io(e.to_string()))
}
