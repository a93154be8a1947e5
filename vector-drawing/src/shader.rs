use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader};

use crate::error::GlError;

pub const VERTEX_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec4 aPosition;
in vec4 aColor;

uniform float uPointSize;

out vec4 vColor;

void main() {
    gl_Position = aPosition;
    gl_PointSize = uPointSize;
    vColor = aColor;
}"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec4 vColor;
out vec4 fragColor;

void main() {
    fragColor = vColor;
}"#;

pub fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, GlError> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or(GlError::Create("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(GlError::Compile(log))
    }
}

pub fn link_program(
    gl: &GL,
    vert_shader: &WebGlShader,
    frag_shader: &WebGlShader,
) -> Result<WebGlProgram, GlError> {
    let program = gl.create_program().ok_or(GlError::Create("program"))?;
    gl.attach_shader(&program, vert_shader);
    gl.attach_shader(&program, frag_shader);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(GlError::Link(log))
    }
}

/// The drawing program with its attribute locations resolved.
pub struct DrawProgram {
    pub program: WebGlProgram,
    pub a_position: u32,
    pub a_color: u32,
}

impl DrawProgram {
    pub fn new(gl: &GL, point_size: f32) -> Result<Self, GlError> {
        let vert_shader = compile_shader(gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let frag_shader = compile_shader(gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(gl, &vert_shader, &frag_shader)?;
        gl.use_program(Some(&program));

        let a_position = attrib_location(gl, &program, "aPosition")?;
        let a_color = attrib_location(gl, &program, "aColor")?;

        if let Some(loc) = gl.get_uniform_location(&program, "uPointSize") {
            gl.uniform1f(Some(&loc), point_size);
        }

        Ok(Self {
            program,
            a_position,
            a_color,
        })
    }
}

fn attrib_location(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32, GlError> {
    let loc = gl.get_attrib_location(program, name);
    if loc < 0 {
        return Err(GlError::Attribute(name));
    }
    Ok(loc as u32)
}
