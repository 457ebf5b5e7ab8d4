//! The rendering-context seam.
//!
//! `GraphicsContext` names exactly the GL operations a session performs.
//! The browser host passes a `glow::Context` (see [`super::glow_context`]);
//! tests substitute a recording fake. Handles are opaque associated types
//! so the same builder and renderer code drives either.

use crate::color::Rgba;
use crate::surface::SurfaceSize;
use glam::Vec2;

/// The two programmable stages a session compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// GL operations needed to build a program, upload the triangle and draw.
///
/// Methods mirror single GL calls or tight groups of them. None of them
/// validates handles; passing a deleted handle is a logic error.
pub trait GraphicsContext {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;
    type UniformLocation;

    /// Creates an empty shader object for `stage`.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;

    /// Submits `source`, compiles it and returns the compile status.
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;

    fn shader_info_log(&self, shader: Self::Shader) -> String;

    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;

    /// Attaches both stages, links, detaches them again and returns the
    /// link status.
    fn link_program(
        &self,
        program: Self::Program,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> bool;

    fn program_info_log(&self, program: Self::Program) -> String;

    fn delete_program(&self, program: Self::Program);

    /// Makes `program` the active program for subsequent draws.
    fn use_program(&self, program: Self::Program);

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;

    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    /// Uploads tightly packed `f32` vertices into a new static buffer and
    /// records the attribute layout in a new vertex array.
    fn upload_vertices(
        &self,
        location: u32,
        components: i32,
        data: &[f32],
    ) -> Result<(Self::VertexArray, Self::Buffer), String>;

    fn bind_vertices(&self, vertex_array: Self::VertexArray);

    fn delete_vertices(&self, vertex_array: Self::VertexArray, buffer: Self::Buffer);

    fn set_uniform_vec2(&self, location: &Self::UniformLocation, value: Vec2);

    fn set_uniform_f32(&self, location: &Self::UniformLocation, value: f32);

    fn viewport(&self, size: SurfaceSize);

    /// Clears the color buffer to `color`.
    fn clear(&self, color: Rgba);

    /// Draws `count` vertices as independent triangles.
    fn draw_triangles(&self, count: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_match_glsl_terminology() {
        assert_eq!(ShaderStage::Vertex.name(), "vertex");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
    }
}
