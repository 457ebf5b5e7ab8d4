//! GL rendering: shader programs, the fullscreen triangle and the renderer.
//!
//! Everything here is written against the [`GraphicsContext`] trait. The
//! `glow` implementation is only compiled with the `glow` feature.
//!
//! # Module overview
//!
//! - [`context`] -- The `GraphicsContext` seam and shader stages.
//! - [`shader`] -- Shader compilation, linking, and error formatting.
//! - [`fullscreen`] -- Fullscreen triangle geometry and vertex shader.
//! - [`fragments`] -- Fragment stages and uniform names per variant.
//! - [`renderer`] -- Linked program + uploaded geometry for one session.

pub mod context;
pub mod fragments;
pub mod fullscreen;
#[cfg(feature = "glow")]
pub mod glow_context;
pub mod renderer;
pub mod shader;

#[cfg(test)]
pub(crate) mod recording;

pub use context::{GraphicsContext, ShaderStage};
pub use fragments::{fragment_source, DIAGONAL_UNIFORM, POINTER_UNIFORM};
pub use fullscreen::{FULLSCREEN_TRIANGLE, FULLSCREEN_VERTEX_SHADER};
pub use renderer::Renderer;
pub use shader::{compile_program, compile_shader, format_shader_error, link_program, ShaderError};
