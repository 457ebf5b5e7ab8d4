//! Shader compilation and linking.
//!
//! Provides the error type, source formatting for debugging, and functions
//! to compile individual shader stages and link them into programs. The
//! compile/link functions work against any [`GraphicsContext`]; the
//! formatting utilities are pure string processing.

use super::context::{GraphicsContext, ShaderStage};
use thiserror::Error;

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    Compile {
        /// The shader stage that failed (e.g. "vertex", "fragment").
        stage: String,
        /// Numbered source followed by the driver's info log.
        log: String,
    },
    /// A program failed to link.
    #[error("shader link error:\n{0}")]
    Link(String),
    /// The driver refused to create a shader or program object.
    #[error("shader object creation failed: {0}")]
    Create(String),
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`. Both may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let source_lines: Vec<&str> = source.lines().collect();

    let width = source_lines.len().max(1).to_string().len();

    let numbered: String = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage.
///
/// On failure the partially created shader object is deleted before the
/// error is returned, so the caller never holds a dead handle.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if the source fails to compile, or
/// `ShaderError::Create` if no shader object could be created.
pub fn compile_shader<G: GraphicsContext>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl.create_shader(stage).map_err(ShaderError::Create)?;

    if gl.compile_shader(shader, source) {
        Ok(shader)
    } else {
        let info_log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        Err(ShaderError::Compile {
            stage: stage.name().to_string(),
            log: format_shader_error(source, &info_log),
        })
    }
}

/// Links a vertex and fragment shader into a program.
///
/// The program is deleted on failure.
///
/// # Errors
///
/// Returns `ShaderError::Link` if linking fails.
pub fn link_program<G: GraphicsContext>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().map_err(ShaderError::Create)?;

    if gl.link_program(program, vertex, fragment) {
        Ok(program)
    } else {
        let info_log = gl.program_info_log(program);
        gl.delete_program(program);
        Err(ShaderError::Link(info_log))
    }
}

/// Compiles vertex and fragment sources and links them into a program.
///
/// If the vertex stage fails the fragment stage is never compiled; if the
/// fragment stage fails the vertex stage is released and linking is never
/// attempted. Stage objects are deleted after linking regardless of the
/// outcome. Failures are logged before being returned.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if either shader fails to compile,
/// or `ShaderError::Link` if linking fails.
pub fn compile_program<G: GraphicsContext>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<G::Program, ShaderError> {
    let result = build(gl, vertex_src, fragment_src);
    match &result {
        Ok(_) => log::debug!("shader program linked"),
        Err(e) => log::error!("{e}"),
    }
    result
}

fn build<G: GraphicsContext>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<G::Program, ShaderError> {
    let vert = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let frag = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(f) => f,
        Err(e) => {
            gl.delete_shader(vert);
            return Err(e);
        }
    };

    let result = link_program(gl, vert, frag);

    gl.delete_shader(vert);
    gl.delete_shader(frag);

    result
}
