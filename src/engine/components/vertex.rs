use std::mem::{ offset_of, size_of };
use serde::{ Deserialize, Serialize };

use crate::engine::config::AttributeLocations;
use crate::engine::error::{ MeshError, MeshResult };
use crate::engine::utils::math::{ Vec2, Vec3 };

/// One vertex as it sits in the vertex buffer. Field order is the attribute
/// order, so the struct can be uploaded as-is.
#[repr(C)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexData {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl VertexData {
    pub const STRIDE: usize = size_of::<VertexData>();

    /// Vertex with an empty tangent frame, see
    /// [`compute_tangent_space`](crate::engine::utils::math::compute_tangent_space).
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
            tangent: [0.0; 3],
            bitangent: [0.0; 3],
        }
    }

    /// The five float attributes in field order, placed at `locations`.
    pub fn layout(locations: &AttributeLocations) -> [VertexAttribute; 5] {
        [
            VertexAttribute::new(locations.position, 3, offset_of!(VertexData, position)),
            VertexAttribute::new(locations.normal, 3, offset_of!(VertexData, normal)),
            VertexAttribute::new(locations.tex_coord, 2, offset_of!(VertexData, tex_coord)),
            VertexAttribute::new(locations.tangent, 3, offset_of!(VertexData, tangent)),
            VertexAttribute::new(locations.bitangent, 3, offset_of!(VertexData, bitangent)),
        ]
    }
}

/// A float vertex attribute inside an interleaved `VertexData` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub offset: usize,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: i32, offset: usize) -> Self {
        Self { location, components, offset }
    }
}

/// A triangle as three indices into the owning mesh's vertices.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Face {
    pub v1: u32,
    pub v2: u32,
    pub v3: u32,
}

impl Face {
    pub fn new(v1: u32, v2: u32, v3: u32) -> Self {
        Self { v1, v2, v3 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.v1, self.v2, self.v3]
    }
}

/// Groups a flattened triangle list into faces. A trailing incomplete
/// triangle is dropped.
pub fn faces_from_indices(indices: &[u32]) -> Vec<Face> {
    indices
        .chunks_exact(3)
        .map(|tri| Face::new(tri[0], tri[1], tri[2]))
        .collect()
}

/// Fails on the first index that does not address one of `vertex_count`
/// vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> MeshResult<()> {
    match indices.iter().position(|&i| (i as usize) >= vertex_count) {
        Some(position) =>
            Err(MeshError::IndexOutOfRange {
                position,
                index: indices[position],
                vertex_count,
            }),
        None => Ok(()),
    }
}

/// Same check for faces. `position` in the error counts flattened corners.
pub fn validate_faces(faces: &[Face], vertex_count: usize) -> MeshResult<()> {
    let corners: Vec<u32> = faces.iter().flat_map(Face::indices).collect();
    validate_indices(&corners, vertex_count)
}
