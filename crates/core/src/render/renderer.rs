//! Program + fullscreen triangle owned by one session.
//!
//! A `Renderer` exists only if its program linked, so holding one is proof
//! the program is safe to bind. Drawing never mutates renderer state.

use super::context::GraphicsContext;
use super::fragments::{fragment_source, DIAGONAL_UNIFORM, POINTER_UNIFORM};
use super::fullscreen::{
    COMPONENTS, FULLSCREEN_TRIANGLE, FULLSCREEN_VERTEX_SHADER, POSITION_ATTRIBUTE, VERTEX_COUNT,
};
use super::shader::compile_program;
use crate::color::Rgba;
use crate::config::SessionConfig;
use crate::error::LumenError;
use crate::pointer::PointerState;
use crate::surface::SurfaceSize;

/// Linked program, uploaded triangle and the uniform locations to feed.
pub struct Renderer<G: GraphicsContext> {
    program: G::Program,
    vertex_array: G::VertexArray,
    buffer: G::Buffer,
    pointer_location: Option<G::UniformLocation>,
    diagonal_location: Option<G::UniformLocation>,
    clear_color: Rgba,
    surface: SurfaceSize,
}

impl<G: GraphicsContext> Renderer<G> {
    /// Builds the variant's program, uploads the triangle, binds the
    /// program and sets the viewport to `surface`.
    ///
    /// # Errors
    ///
    /// Returns `LumenError::Shader` if compilation or linking fails and
    /// `LumenError::Gpu` if the geometry cannot be uploaded. Nothing is
    /// bound in either case.
    pub fn new(gl: &G, config: &SessionConfig, surface: SurfaceSize) -> Result<Self, LumenError> {
        let program = compile_program(
            gl,
            FULLSCREEN_VERTEX_SHADER,
            fragment_source(config.variant),
        )?;

        let geometry = gl
            .attrib_location(program, POSITION_ATTRIBUTE)
            .ok_or_else(|| format!("attribute {POSITION_ATTRIBUTE} not found"))
            .and_then(|location| gl.upload_vertices(location, COMPONENTS, &FULLSCREEN_TRIANGLE));

        let (vertex_array, buffer) = match geometry {
            Ok(handles) => handles,
            Err(e) => {
                log::error!("geometry upload failed: {e}");
                gl.delete_program(program);
                return Err(LumenError::Gpu(e));
            }
        };

        gl.use_program(program);
        gl.viewport(surface);

        let pointer_location = gl.uniform_location(program, POINTER_UNIFORM);
        let diagonal_location = gl.uniform_location(program, DIAGONAL_UNIFORM);

        log::debug!(
            "renderer ready: variant={} surface={}x{}",
            config.variant.name(),
            surface.width(),
            surface.height()
        );

        Ok(Self {
            program,
            vertex_array,
            buffer,
            pointer_location,
            diagonal_location,
            clear_color: config.clear_color,
            surface,
        })
    }

    /// Updates the viewport for a new surface size.
    pub fn resize(&mut self, gl: &G, surface: SurfaceSize) {
        self.surface = surface;
        gl.viewport(surface);
    }

    /// Pushes the pointer uniforms, clamping the diagonal to `min_diagonal`.
    ///
    /// A no-op for programs without the uniforms (the static variant).
    pub fn set_pointer(&self, gl: &G, pointer: &PointerState, min_diagonal: f32) {
        if let Some(location) = &self.pointer_location {
            gl.set_uniform_vec2(location, pointer.position());
        }
        if let Some(location) = &self.diagonal_location {
            gl.set_uniform_f32(location, pointer.uniform_diagonal(min_diagonal));
        }
    }

    /// Clears to the background color and draws the triangle once.
    pub fn draw(&self, gl: &G) {
        gl.clear(self.clear_color);
        gl.use_program(self.program);
        gl.bind_vertices(self.vertex_array);
        gl.draw_triangles(VERTEX_COUNT);
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Releases the program and geometry.
    pub fn destroy(self, gl: &G) {
        gl.delete_vertices(self.vertex_array, self.buffer);
        gl.delete_program(self.program);
    }
}
