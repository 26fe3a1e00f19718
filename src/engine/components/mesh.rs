use std::rc::Rc;

use crate::engine::components::material::MeshInfo;
use crate::engine::components::texture::Texture;
use crate::engine::components::vertex::{ validate_faces, validate_indices, Face, VertexData };
use crate::engine::config::MeshConfig;
use crate::engine::error::{ MeshError, MeshResult };
use crate::engine::rendering::device::{ BufferTarget, GpuDevice };
use crate::engine::rendering::shader::ShaderProgram;
use crate::engine::utils::math::Aabb;

/// Vertex array plus the two buffers it reads from.
struct MeshBuffers<D: GpuDevice> {
    vao: D::VertexArray,
    vbo: D::Buffer,
    ebo: D::Buffer,
}

impl<D: GpuDevice> MeshBuffers<D> {
    /// Creates all three objects or none of them.
    fn allocate(device: &D) -> MeshResult<Self> {
        let vao = device.create_vertex_array().map_err(MeshError::Gpu)?;
        let vbo = match device.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                device.delete_vertex_array(vao);
                return Err(MeshError::Gpu(e));
            }
        };
        let ebo = match device.create_buffer() {
            Ok(ebo) => ebo,
            Err(e) => {
                device.delete_buffer(vbo);
                device.delete_vertex_array(vao);
                return Err(MeshError::Gpu(e));
            }
        };
        Ok(Self { vao, vbo, ebo })
    }
}

/// A triangle mesh and the GPU objects holding its geometry.
///
/// The CPU-side vertices, indices and faces stay readable after upload. The
/// vertex array and both buffers are released when the mesh is dropped; the
/// textures are shared and left alone.
pub struct Mesh<D: GpuDevice = glow::Context> {
    device: Rc<D>,
    buffers: MeshBuffers<D>,
    config: MeshConfig,
    vertices: Vec<VertexData>,
    indices: Vec<u32>,
    faces: Vec<Face>,
    textures: Vec<Texture<D::Texture>>,
    mesh_info: Option<MeshInfo>,
}

impl<D: GpuDevice> Mesh<D> {
    pub fn new(
        device: Rc<D>,
        vertices: Vec<VertexData>,
        indices: Vec<u32>,
        faces: Vec<Face>,
        textures: Vec<Texture<D::Texture>>,
        mesh_info: Option<MeshInfo>
    ) -> MeshResult<Self> {
        Self::with_config(device, vertices, indices, faces, textures, mesh_info, MeshConfig::default())
    }

    pub fn with_config(
        device: Rc<D>,
        vertices: Vec<VertexData>,
        indices: Vec<u32>,
        faces: Vec<Face>,
        textures: Vec<Texture<D::Texture>>,
        mesh_info: Option<MeshInfo>,
        config: MeshConfig
    ) -> MeshResult<Self> {
        validate_indices(&indices, vertices.len())?;
        validate_faces(&faces, vertices.len())?;
        warn_if_not_triangles(&indices);

        let buffers = MeshBuffers::allocate(device.as_ref())?;
        let mesh = Self {
            device,
            buffers,
            config,
            vertices,
            indices,
            faces,
            textures,
            mesh_info,
        };
        mesh.setup_mesh();
        Ok(mesh)
    }

    /// Uploads vertices and indices and records the attribute layout in the
    /// vertex array.
    fn setup_mesh(&self) {
        let device = self.device.as_ref();
        device.bind_vertex_array(Some(self.buffers.vao));

        device.upload_buffer(
            BufferTarget::Vertex,
            self.buffers.vbo,
            bytemuck::cast_slice(&self.vertices),
            self.config.vertex_usage
        );
        device.upload_buffer(
            BufferTarget::Index,
            self.buffers.ebo,
            bytemuck::cast_slice(&self.indices),
            self.config.index_usage
        );

        for attribute in VertexData::layout(&self.config.attributes).iter() {
            device.set_vertex_attribute(attribute, VertexData::STRIDE);
        }

        device.bind_vertex_array(None);
        log::debug!(
            "Mesh uploaded: {} vertices, {} indices, vao {:?}",
            self.vertices.len(),
            self.indices.len(),
            self.buffers.vao
        );
    }

    /// Draws the mesh with `program`.
    ///
    /// With `use_mesh_info`, texture *i* is bound to texture unit *i* and its
    /// sampler uniform (the texture name) is pointed at that unit; a texture
    /// whose sampler the program lacks is skipped with a warning. The
    /// material block, if the mesh has one, is uploaded next. Without
    /// `use_mesh_info` nothing but the draw is issued.
    pub fn render<P: ShaderProgram + ?Sized>(&self, program: &P, use_mesh_info: bool) {
        let device = self.device.as_ref();
        program.bind();

        if use_mesh_info {
            for (unit, texture) in self.textures.iter().enumerate() {
                if !program.has_uniform(&texture.name) {
                    log::warn!(
                        "Texture {:?} ({}) has no sampler uniform {:?} in the program, not bound",
                        texture.path,
                        unit,
                        texture.name
                    );
                    continue;
                }
                device.bind_texture(unit as u32, texture.id);
                program.set_int(&texture.name, unit as i32);
            }
            if let Some(info) = &self.mesh_info {
                info.apply(program, &self.config.uniforms);
            }
        }

        if self.indices.is_empty() {
            return;
        }

        device.bind_vertex_array(Some(self.buffers.vao));
        device.draw_indexed_triangles(self.indices.len());
        device.bind_vertex_array(None);
        log::trace!("Drew {} triangles from vao {:?}", self.triangle_count(), self.buffers.vao);
    }

    /// Replaces the index list and re-uploads the index buffer. On error the
    /// mesh is left untouched.
    pub fn set_indices(&mut self, indices: Vec<u32>) -> MeshResult<()> {
        validate_indices(&indices, self.vertices.len())?;
        warn_if_not_triangles(&indices);

        self.indices = indices;
        let device = self.device.as_ref();
        device.bind_vertex_array(Some(self.buffers.vao));
        device.upload_buffer(
            BufferTarget::Index,
            self.buffers.ebo,
            bytemuck::cast_slice(&self.indices),
            self.config.index_usage
        );
        device.bind_vertex_array(None);
        Ok(())
    }

    pub fn vertices(&self) -> &[VertexData] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn textures(&self) -> &[Texture<D::Texture>] {
        &self.textures
    }

    pub fn mesh_info(&self) -> Option<&MeshInfo> {
        self.mesh_info.as_ref()
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| v.position))
    }
}

impl<D: GpuDevice> Drop for Mesh<D> {
    fn drop(&mut self) {
        let device = self.device.as_ref();
        device.delete_vertex_array(self.buffers.vao);
        device.delete_buffer(self.buffers.vbo);
        device.delete_buffer(self.buffers.ebo);
        log::debug!("Released mesh vao {:?}", self.buffers.vao);
    }
}

impl<D: GpuDevice> std::fmt::Debug for Mesh<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("vao", &self.buffers.vao)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .field("face_count", &self.faces.len())
            .field("texture_count", &self.textures.len())
            .field("has_mesh_info", &self.mesh_info.is_some())
            .finish()
    }
}

fn warn_if_not_triangles(indices: &[u32]) {
    if indices.len() % 3 != 0 {
        log::warn!("Index count {} is not a multiple of 3, trailing indices form no triangle", indices.len());
    }
}
