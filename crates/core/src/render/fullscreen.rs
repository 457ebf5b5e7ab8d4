//! Fullscreen triangle geometry and its vertex shader.
//!
//! A single oversized triangle covers the viewport without the diagonal
//! seam a two-triangle quad has. Its vertices are uploaded once per
//! renderer and drawn with `draw_triangles(3)`.

/// Name of the position attribute in [`FULLSCREEN_VERTEX_SHADER`].
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Clip-space corners `(-1,-1)`, `(3,-1)`, `(-1,3)`; the GPU clips the excess.
pub const FULLSCREEN_TRIANGLE: [f32; 6] = [-1.0, -1.0, 3.0, -1.0, -1.0, 3.0];

/// Components per vertex in [`FULLSCREEN_TRIANGLE`].
pub const COMPONENTS: i32 = 2;

/// Number of vertices in [`FULLSCREEN_TRIANGLE`].
pub const VERTEX_COUNT: i32 = FULLSCREEN_TRIANGLE.len() as i32 / COMPONENTS;

/// GLSL ES 3.0 vertex shader passing the triangle through unchanged.
pub const FULLSCREEN_VERTEX_SHADER: &str = r#"#version 300 es
in vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_three_vertices() {
        assert_eq!(VERTEX_COUNT, 3);
    }

    #[test]
    fn triangle_covers_the_clip_space_square() {
        // Every corner of [-1, 1]^2 must lie inside the triangle
        // x >= -1, y >= -1, x + y <= 2.
        for (x, y) in [(-1.0_f32, -1.0_f32), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            assert!(x >= -1.0 && y >= -1.0 && x + y <= 2.0, "({x}, {y}) not covered");
        }
        let v = FULLSCREEN_TRIANGLE;
        assert_eq!((v[0], v[1]), (-1.0, -1.0));
        assert_eq!((v[2], v[3]), (3.0, -1.0));
        assert_eq!((v[4], v[5]), (-1.0, 3.0));
    }

    #[test]
    fn vertex_shader_declares_position_attribute() {
        assert!(
            FULLSCREEN_VERTEX_SHADER.contains(&format!("in vec2 {POSITION_ATTRIBUTE};")),
            "expected attribute declaration in:\n{FULLSCREEN_VERTEX_SHADER}"
        );
    }

    #[test]
    fn vertex_shader_is_glsl_es_3() {
        assert!(FULLSCREEN_VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FULLSCREEN_VERTEX_SHADER.contains("gl_Position"));
    }
}
