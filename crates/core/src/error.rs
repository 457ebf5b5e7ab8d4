//! Error types for the lumen core.

use crate::render::ShaderError;
use thiserror::Error;

/// Errors produced while setting up or driving a rendering session.
///
/// Every variant is terminal for setup: the session never issues a draw
/// call after one of these is returned.
#[derive(Debug, Error)]
pub enum LumenError {
    /// No rendering context with the required capabilities could be obtained.
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),

    /// Shader compilation or program linking failed.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// A GPU object (buffer, vertex array) could not be created.
    #[error("gpu resource error: {0}")]
    Gpu(String),

    /// Width or height was zero when describing a surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration value was present but not acceptable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
