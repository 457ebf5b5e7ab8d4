//! Fragment stages for the two variants.
//!
//! The CPU reference in [`crate::shade`] evaluates the same formulas; keep
//! the two in step when editing either.

use crate::config::Variant;

/// Uniform holding the pointer position in bottom-left-origin pixels.
pub const POINTER_UNIFORM: &str = "u_pointer";

/// Uniform holding the surface diagonal in pixels.
pub const DIAGONAL_UNIFORM: &str = "u_diagonal";

/// Constant cornflower-blue fill.
pub const SOLID_FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
out vec4 frag_color;
void main() {
    frag_color = vec4(0.39, 0.58, 0.93, 1.0);
}
"#;

/// Red intensity grows with distance from the pointer, normalized by the
/// surface diagonal. Output is clamped by the color attachment.
pub const GRADIENT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;
uniform vec2 u_pointer;
uniform float u_diagonal;
out vec4 frag_color;
void main() {
    float t = distance(gl_FragCoord.xy, u_pointer) / u_diagonal;
    frag_color = vec4(t, 0.0, 0.0, 1.0);
}
"#;

/// Fragment source for `variant`.
pub fn fragment_source(variant: Variant) -> &'static str {
    match variant {
        Variant::Static => SOLID_FRAGMENT_SHADER,
        Variant::Interactive => GRADIENT_FRAGMENT_SHADER,
    }
}
