use js_sys::Uint8Array;
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer};

use crate::error::GlError;

/// A GPU buffer allocated once for its full size and then filled piecewise.
pub struct Buffer {
    gl: GL,
    pub obj: WebGlBuffer,
    target: u32,
    size: usize,
}

impl Buffer {
    /// Creates the buffer and reserves `size` bytes of uninitialized storage.
    pub fn with_size(gl: &GL, target: u32, size: usize, usage: u32) -> Result<Self, GlError> {
        let byte_size = i32::try_from(size).map_err(|_| GlError::BufferTooLarge(size))?;
        let obj = gl.create_buffer().ok_or(GlError::Create("vertex buffer"))?;
        let buffer = Self {
            gl: gl.clone(),
            obj,
            target,
            size,
        };
        buffer.bind();
        gl.buffer_data_with_i32(target, byte_size, usage);
        Ok(buffer)
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(self.target, Some(&self.obj));
    }

    /// Overwrites the bytes starting at `offset` with `data`.
    pub fn set_sub_data<D: Copy>(&self, offset: usize, data: &[D]) {
        // SAFETY: `D` is plain vertex data, and the view is handed to GL
        // before anything can allocate on the wasm heap.
        let (_, data_bytes, _) = unsafe { data.align_to::<u8>() };
        debug_assert!(offset + data_bytes.len() <= self.size);
        self.bind();
        let js_array = unsafe { Uint8Array::view(data_bytes) };
        self.gl
            .buffer_sub_data_with_i32_and_array_buffer_view(self.target, offset as i32, &js_array);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.obj));
    }
}
