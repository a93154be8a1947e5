use web_sys::{WebGl2RenderingContext as GL, WebGlVertexArrayObject};

use crate::error::GlError;
use crate::vbo::Buffer;

pub struct VertexArray {
    gl: GL,
    pub obj: WebGlVertexArrayObject,
}

impl VertexArray {
    pub fn new(gl: &GL) -> Result<Self, GlError> {
        let obj = gl
            .create_vertex_array()
            .ok_or(GlError::Create("vertex array"))?;
        Ok(Self { gl: gl.clone(), obj })
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(&self.obj));
    }

    pub fn unbind(&self) {
        self.gl.bind_vertex_array(None);
    }

    /// Points attribute `attrib_pos` at tightly packed `components`-float
    /// vertices in `buffer`.
    pub fn set_attribute(&self, buffer: &Buffer, attrib_pos: u32, components: i32) {
        self.bind();
        buffer.bind();

        gl_attrib_pointer(&self.gl, attrib_pos, components);
        self.gl.enable_vertex_attrib_array(attrib_pos);
    }
}

fn gl_attrib_pointer(gl: &GL, attrib_pos: u32, components: i32) {
    let stride = components * std::mem::size_of::<f32>() as i32;
    gl.vertex_attrib_pointer_with_i32(attrib_pos, components, GL::FLOAT, false, stride, 0);
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(Some(&self.obj));
    }
}
