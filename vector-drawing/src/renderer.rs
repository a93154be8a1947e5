use log::debug;
use web_sys::WebGl2RenderingContext as GL;

use crate::config::DrawingConfig;
use crate::error::GlError;
use crate::primitive::PrimitiveKind;
use crate::scene::{Scene, Shape};
use crate::shader::DrawProgram;
use crate::storage::{buffer_bytes, VertexStorage, COLOR_COMPONENTS, POSITION_COMPONENTS};
use crate::vao::VertexArray;
use crate::vbo::Buffer;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

pub fn gl_mode(kind: PrimitiveKind) -> u32 {
    match kind {
        PrimitiveKind::Points => GL::POINTS,
        PrimitiveKind::Lines => GL::LINES,
        PrimitiveKind::LineStrip => GL::LINE_STRIP,
        PrimitiveKind::LineLoop => GL::LINE_LOOP,
        PrimitiveKind::Triangles => GL::TRIANGLES,
        PrimitiveKind::TriangleStrip => GL::TRIANGLE_STRIP,
        PrimitiveKind::TriangleFan => GL::TRIANGLE_FAN,
    }
}

/// One pending `bufferSubData` pair: where the new vertices go and what they are.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TailUpload<'a> {
    position_offset: usize,
    colors_offset: usize,
    positions: &'a [f32],
    colors: &'a [f32],
}

/// Tracks how many vertices of a storage already live on the GPU.
#[derive(Debug, Default)]
struct UploadCursor {
    uploaded: usize,
}

impl UploadCursor {
    /// The vertices written since the previous call, with their byte offsets
    /// in the GPU buffers. Advances past them.
    fn next_upload<'a>(&mut self, storage: &'a VertexStorage) -> Option<TailUpload<'a>> {
        let tail = storage.range_from(self.uploaded);
        if tail.is_empty() {
            return None;
        }
        self.uploaded = tail.start() + tail.len();
        Some(TailUpload {
            position_offset: tail.start() * POSITION_COMPONENTS * FLOAT_SIZE,
            colors_offset: tail.start() * COLOR_COMPONENTS * FLOAT_SIZE,
            positions: tail.positions(),
            colors: tail.colors(),
        })
    }
}

/// GPU side of one scene shape: a vertex array over two buffers sized for
/// the full shape capacity.
struct GpuShape {
    vao: VertexArray,
    positions: Buffer,
    colors: Buffer,
    cursor: UploadCursor,
}

impl GpuShape {
    fn new(gl: &GL, program: &DrawProgram, capacity: usize) -> Result<Self, GlError> {
        let vao = VertexArray::new(gl)?;
        let positions = Buffer::with_size(
            gl,
            GL::ARRAY_BUFFER,
            buffer_bytes(capacity, POSITION_COMPONENTS)?,
            GL::DYNAMIC_DRAW,
        )?;
        let colors = Buffer::with_size(
            gl,
            GL::ARRAY_BUFFER,
            buffer_bytes(capacity, COLOR_COMPONENTS)?,
            GL::DYNAMIC_DRAW,
        )?;

        vao.set_attribute(&positions, program.a_position, POSITION_COMPONENTS as i32);
        vao.set_attribute(&colors, program.a_color, COLOR_COMPONENTS as i32);
        vao.unbind();

        Ok(Self {
            vao,
            positions,
            colors,
            cursor: UploadCursor::default(),
        })
    }

    /// Uploads the vertices written since the last call, leaving earlier
    /// ones untouched on the GPU.
    fn upload_tail(&mut self, shape: &Shape) {
        if let Some(upload) = self.cursor.next_upload(shape.storage()) {
            self.positions
                .set_sub_data(upload.position_offset, upload.positions);
            self.colors.set_sub_data(upload.colors_offset, upload.colors);
        }
    }
}

/// Mirrors a [`Scene`] into WebGL buffers and draws it.
pub struct Renderer {
    gl: GL,
    program: DrawProgram,
    clear_color: [f32; 4],
    shapes: Vec<GpuShape>,
}

impl Renderer {
    pub fn new(gl: GL, config: &DrawingConfig) -> Result<Self, GlError> {
        let program = DrawProgram::new(&gl, config.point_size)?;
        let [r, g, b, a] = config.clear_color;
        gl.clear_color(r, g, b, a);

        Ok(Self {
            gl,
            program,
            clear_color: config.clear_color,
            shapes: Vec::new(),
        })
    }

    pub fn set_viewport(&self, width: i32, height: i32) {
        self.gl.viewport(0, 0, width, height);
    }

    /// Creates buffers for new shapes and uploads newly appended vertices.
    pub fn sync(&mut self, scene: &Scene) -> Result<(), GlError> {
        for shape in &scene.shapes()[self.shapes.len()..] {
            debug!(
                "allocating gpu buffers for {} shape ({} vertices)",
                shape.kind(),
                shape.storage().capacity()
            );
            let gpu = GpuShape::new(&self.gl, &self.program, shape.storage().capacity())?;
            self.shapes.push(gpu);
        }

        for (gpu, shape) in self.shapes.iter_mut().zip(scene.shapes()) {
            gpu.upload_tail(shape);
        }
        Ok(())
    }

    /// Clears the canvas and draws every shape in creation order.
    pub fn draw(&mut self, scene: &Scene) -> Result<(), GlError> {
        self.sync(scene)?;

        let gl = &self.gl;
        let [r, g, b, a] = self.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program.program));

        let mut gpu_shapes = self.shapes.iter();
        scene.render_all(|kind, count| {
            let Some(gpu) = gpu_shapes.next() else {
                return;
            };
            if count == 0 {
                return;
            }
            gpu.vao.bind();
            gl.draw_arrays(gl_mode(kind), 0, count as i32);
        });
        gl.bind_vertex_array(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_draw_mode() {
        let mut modes: Vec<u32> = PrimitiveKind::ALL.iter().map(|k| gl_mode(*k)).collect();
        modes.sort_unstable();
        modes.dedup();
        assert_eq!(modes.len(), PrimitiveKind::ALL.len());
        assert_eq!(gl_mode(PrimitiveKind::TriangleFan), GL::TRIANGLE_FAN);
        assert_eq!(gl_mode(PrimitiveKind::Points), GL::POINTS);
    }

    #[test]
    fn empty_storage_has_nothing_to_upload() {
        let storage = VertexStorage::new(8).unwrap();
        let mut cursor = UploadCursor::default();
        assert_eq!(cursor.next_upload(&storage), None);
        assert_eq!(cursor.uploaded, 0);
    }

    #[test]
    fn second_sync_uploads_only_new_vertices_at_their_offsets() {
        let mut storage = VertexStorage::new(8).unwrap();
        let mut cursor = UploadCursor::default();

        storage.append([0.0, 0.0], [1.0, 0.0, 0.0, 1.0]).unwrap();
        storage.append([0.5, 0.5], [1.0, 0.0, 0.0, 1.0]).unwrap();
        let first = cursor.next_upload(&storage).unwrap();
        assert_eq!(first.position_offset, 0);
        assert_eq!(first.colors_offset, 0);
        assert_eq!(first.positions, &[0.0, 0.0, 0.5, 0.5]);
        assert_eq!(first.colors.len(), 8);
        assert_eq!(cursor.uploaded, 2);

        // nothing new since the last sync
        assert_eq!(cursor.next_upload(&storage), None);

        storage.append([-0.5, 0.25], [0.0, 0.0, 1.0, 1.0]).unwrap();
        let second = cursor.next_upload(&storage).unwrap();
        assert_eq!(second.position_offset, 2 * POSITION_COMPONENTS * FLOAT_SIZE);
        assert_eq!(second.colors_offset, 2 * COLOR_COMPONENTS * FLOAT_SIZE);
        assert_eq!(second.position_offset, 16);
        assert_eq!(second.colors_offset, 32);
        assert_eq!(second.positions, &[-0.5, 0.25]);
        assert_eq!(second.colors, &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(cursor.uploaded, 3);
    }
}
