use std::fmt::Debug;
use glow::HasContext;

use crate::engine::components::vertex::VertexAttribute;
use crate::engine::config::BufferUsage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Vertex,
    Index,
}

impl BufferTarget {
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Vertex => glow::ARRAY_BUFFER,
            BufferTarget::Index => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// The GPU operations a [`Mesh`](crate::engine::components::mesh::Mesh)
/// issues. Every call assumes the device's context is current on the calling
/// thread.
pub trait GpuDevice {
    type VertexArray: Copy + Debug;
    type Buffer: Copy + Debug;
    type Texture: Copy + Debug;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    /// Binds `buffer` to `target` and replaces its contents.
    fn upload_buffer(&self, target: BufferTarget, buffer: Self::Buffer, data: &[u8], usage: BufferUsage);

    /// Enables `attribute` and points it into the currently bound vertex buffer.
    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: usize);

    fn bind_texture(&self, unit: u32, texture: Self::Texture);

    /// Draws `index_count` `u32` indices from the bound index buffer as triangles.
    fn draw_indexed_triangles(&self, index_count: usize);
}

impl GpuDevice for glow::Context {
    type VertexArray = glow::VertexArray;
    type Buffer = glow::Buffer;
    type Texture = glow::Texture;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn upload_buffer(&self, target: BufferTarget, buffer: Self::Buffer, data: &[u8], usage: BufferUsage) {
        unsafe {
            self.bind_buffer(target.gl_enum(), Some(buffer));
            self.buffer_data_u8_slice(target.gl_enum(), data, usage.gl_enum());
        }
    }

    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: usize) {
        let (Some(gl_stride), Some(gl_offset)) = (
            gl_int(stride, "vertex stride"),
            gl_int(attribute.offset, "attribute offset"),
        ) else {
            return;
        };
        unsafe {
            self.enable_vertex_attrib_array(attribute.location);
            self.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                gl_stride,
                gl_offset
            );
        }
    }

    fn bind_texture(&self, unit: u32, texture: Self::Texture) {
        unsafe {
            self.active_texture(glow::TEXTURE0 + unit);
            HasContext::bind_texture(self, glow::TEXTURE_2D, Some(texture));
        }
    }

    fn draw_indexed_triangles(&self, index_count: usize) {
        let Some(count) = gl_int(index_count, "index count") else {
            return;
        };
        unsafe {
            self.draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0);
        }
    }
}

/// Converts a size for a `GLint`/`GLsizei` parameter. Values past `i32::MAX`
/// are logged and refused instead of wrapping.
pub fn gl_int(value: usize, what: &str) -> Option<i32> {
    match i32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            log::error!("{} {} exceeds the GL integer range, call skipped", what, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_int_passes_representable_sizes() {
        assert_eq!(gl_int(0, "index count"), Some(0));
        assert_eq!(gl_int(56, "vertex stride"), Some(56));
        assert_eq!(gl_int(i32::MAX as usize, "index count"), Some(i32::MAX));
    }

    #[test]
    fn gl_int_refuses_sizes_that_would_wrap() {
        assert_eq!(gl_int(i32::MAX as usize + 1, "index count"), None);
        assert_eq!(gl_int(usize::MAX, "attribute offset"), None);
    }

    #[test]
    fn targets_map_to_gl_enums() {
        assert_eq!(BufferTarget::Vertex.gl_enum(), glow::ARRAY_BUFFER);
        assert_eq!(BufferTarget::Index.gl_enum(), glow::ELEMENT_ARRAY_BUFFER);
    }
}
