//! Recording `GraphicsContext` used by unit tests.
//!
//! Handles are plain integers. A shader "compiles" when its source has a
//! `main` function and no `#error` directive. The framebuffer is modelled
//! as the last clear color plus the draws issued since that clear.

use super::context::{GraphicsContext, ShaderStage};
use crate::color::Rgba;
use crate::surface::SurfaceSize;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(u32),
    UploadVertices { location: u32, components: i32, data: Vec<f32> },
    BindVertices(u32),
    DeleteVertices(u32, u32),
    UniformVec2(String, Vec2),
    UniformF32(String, f32),
    Viewport(u32, u32),
    Clear(Rgba),
    DrawTriangles(i32),
}

/// One draw as seen by the modelled framebuffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub program: Option<u32>,
    pub vertex_array: Option<u32>,
    pub count: i32,
    pub uniforms: BTreeMap<String, Vec<f32>>,
}

/// Modelled framebuffer contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Framebuffer {
    pub clear: Option<Rgba>,
    pub draws: Vec<DrawRecord>,
}

#[derive(Default)]
pub struct RecordingContext {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    live_shaders: RefCell<BTreeSet<u32>>,
    live_programs: RefCell<BTreeSet<u32>>,
    bound_program: Cell<Option<u32>>,
    bound_vertices: Cell<Option<u32>>,
    uniforms: RefCell<BTreeMap<String, Vec<f32>>>,
    framebuffer: RefCell<Framebuffer>,
    fail_link: bool,
    fail_create: bool,
    fail_upload: bool,
    missing_attribute: bool,
}

impl RecordingContext {
    pub const COMPILE_LOG: &'static str = "ERROR: 0:1: fake compile failure";
    pub const LINK_LOG: &'static str = "fake link failure";

    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose link step always fails.
    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    /// A context that cannot create shader or program objects.
    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    /// A context that links programs but cannot allocate vertex buffers.
    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    /// A context whose linked programs expose no vertex attributes.
    pub fn missing_attribute() -> Self {
        Self {
            missing_attribute: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn live_shaders(&self) -> usize {
        self.live_shaders.borrow().len()
    }

    pub fn live_programs(&self) -> usize {
        self.live_programs.borrow().len()
    }

    pub fn framebuffer(&self) -> Framebuffer {
        self.framebuffer.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GraphicsContext for RecordingContext {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        if self.fail_create {
            return Err("out of shader objects".into());
        }
        let id = self.next();
        self.live_shaders.borrow_mut().insert(id);
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) -> bool {
        self.record(Call::CompileShader(shader));
        source.contains("main") && !source.contains("#error")
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        Self::COMPILE_LOG.to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
        self.live_shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        if self.fail_create {
            return Err("out of program objects".into());
        }
        let id = self.next();
        self.live_programs.borrow_mut().insert(id);
        Ok(id)
    }

    fn link_program(&self, program: u32, _vertex: u32, _fragment: u32) -> bool {
        self.record(Call::LinkProgram(program));
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        Self::LINK_LOG.to_string()
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
        self.live_programs.borrow_mut().remove(&program);
    }

    fn use_program(&self, program: u32) {
        self.record(Call::UseProgram(program));
        self.bound_program.set(Some(program));
    }

    fn attrib_location(&self, _program: u32, _name: &str) -> Option<u32> {
        (!self.missing_attribute).then_some(0)
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn upload_vertices(
        &self,
        location: u32,
        components: i32,
        data: &[f32],
    ) -> Result<(u32, u32), String> {
        self.record(Call::UploadVertices {
            location,
            components,
            data: data.to_vec(),
        });
        if self.fail_upload {
            return Err("out of buffer objects".into());
        }
        let vao = self.next();
        let buffer = self.next();
        self.bound_vertices.set(Some(vao));
        Ok((vao, buffer))
    }

    fn bind_vertices(&self, vertex_array: u32) {
        self.record(Call::BindVertices(vertex_array));
        self.bound_vertices.set(Some(vertex_array));
    }

    fn delete_vertices(&self, vertex_array: u32, buffer: u32) {
        self.record(Call::DeleteVertices(vertex_array, buffer));
    }

    fn set_uniform_vec2(&self, location: &String, value: Vec2) {
        self.record(Call::UniformVec2(location.clone(), value));
        self.uniforms
            .borrow_mut()
            .insert(location.clone(), vec![value.x, value.y]);
    }

    fn set_uniform_f32(&self, location: &String, value: f32) {
        self.record(Call::UniformF32(location.clone(), value));
        self.uniforms.borrow_mut().insert(location.clone(), vec![value]);
    }

    fn viewport(&self, size: SurfaceSize) {
        self.record(Call::Viewport(size.width(), size.height()));
    }

    fn clear(&self, color: Rgba) {
        self.record(Call::Clear(color));
        *self.framebuffer.borrow_mut() = Framebuffer {
            clear: Some(color),
            draws: Vec::new(),
        };
    }

    fn draw_triangles(&self, count: i32) {
        self.record(Call::DrawTriangles(count));
        let draw = DrawRecord {
            program: self.bound_program.get(),
            vertex_array: self.bound_vertices.get(),
            count,
            uniforms: self.uniforms.borrow().clone(),
        };
        self.framebuffer.borrow_mut().draws.push(draw);
    }
}
