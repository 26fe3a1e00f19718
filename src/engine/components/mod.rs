pub mod material;
pub mod mesh;
pub mod texture;
pub mod vertex;

pub use material::MeshInfo;
pub use mesh::Mesh;
pub use texture::{ Texture, TextureSet };
pub use vertex::{ faces_from_indices, Face, VertexAttribute, VertexData };
