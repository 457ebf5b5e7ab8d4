//! [`GraphicsContext`] for `glow::Context` (WebGL2 in the browser, GL ES 3 natively).
//!
//! Only available with the `glow` feature.

use super::context::{GraphicsContext, ShaderStage};
use crate::color::Rgba;
use crate::surface::SurfaceSize;
use glam::Vec2;
use glow::HasContext;

// SAFETY (whole impl): glow marks raw GL calls unsafe. Every handle passed
// in was produced by this same context, enum arguments are valid GL
// constants, and the uploaded slice outlives the buffer_data call.
#[allow(unsafe_code)]
impl GraphicsContext for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        let shader_type = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn compile_shader(&self, shader: glow::Shader, source: &str) -> bool {
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
            self.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn link_program(
        &self,
        program: glow::Program,
        vertex: glow::Shader,
        fragment: glow::Shader,
    ) -> bool {
        unsafe {
            self.attach_shader(program, vertex);
            self.attach_shader(program, fragment);
            HasContext::link_program(self, program);

            // The program keeps its own copy of the stages once linked.
            self.detach_shader(program, vertex);
            self.detach_shader(program, fragment);

            self.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: glow::Program) {
        unsafe { HasContext::use_program(self, Some(program)) }
    }

    fn attrib_location(&self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn upload_vertices(
        &self,
        location: u32,
        components: i32,
        data: &[f32],
    ) -> Result<(glow::VertexArray, glow::Buffer), String> {
        unsafe {
            let vertex_array = self.create_vertex_array()?;
            let buffer = match self.create_buffer() {
                Ok(b) => b,
                Err(e) => {
                    self.delete_vertex_array(vertex_array);
                    return Err(e);
                }
            };

            self.bind_vertex_array(Some(vertex_array));
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
            self.enable_vertex_attrib_array(location);
            self.vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, 0, 0);

            Ok((vertex_array, buffer))
        }
    }

    fn bind_vertices(&self, vertex_array: glow::VertexArray) {
        unsafe { self.bind_vertex_array(Some(vertex_array)) }
    }

    fn delete_vertices(&self, vertex_array: glow::VertexArray, buffer: glow::Buffer) {
        unsafe {
            self.delete_vertex_array(vertex_array);
            self.delete_buffer(buffer);
        }
    }

    fn set_uniform_vec2(&self, location: &glow::UniformLocation, value: Vec2) {
        unsafe { self.uniform_2_f32(Some(location), value.x, value.y) }
    }

    fn set_uniform_f32(&self, location: &glow::UniformLocation, value: f32) {
        unsafe { self.uniform_1_f32(Some(location), value) }
    }

    fn viewport(&self, size: SurfaceSize) {
        let (width, height) = size.viewport();
        unsafe { HasContext::viewport(self, 0, 0, width, height) }
    }

    fn clear(&self, color: Rgba) {
        unsafe {
            self.clear_color(color.r, color.g, color.b, color.a);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT);
        }
    }

    fn draw_triangles(&self, count: i32) {
        unsafe { self.draw_arrays(glow::TRIANGLES, 0, count) }
    }
}
