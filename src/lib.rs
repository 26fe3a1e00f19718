//! OpenGL triangle meshes: interleaved vertex data, material parameters and
//! the vertex array / vertex buffer / index buffer objects that draw them.
//!
//! ```no_run
//! use std::rc::Rc;
//! use glmesh::{ faces_from_indices, GlShaderProgram, Mesh, MeshInfo, VertexData };
//!
//! # fn demo(gl: glow::Context, vs: &str, fs: &str) -> glmesh::MeshResult<()> {
//! let gl = Rc::new(gl);
//! let program = GlShaderProgram::new(gl.clone(), vs, fs)?;
//! let n = [0.0, 0.0, 1.0];
//! let vertices = vec![
//!     VertexData::new([0.0, 0.0, 0.0], n, [0.0, 0.0]),
//!     VertexData::new([1.0, 0.0, 0.0], n, [1.0, 0.0]),
//!     VertexData::new([1.0, 1.0, 0.0], n, [1.0, 1.0]),
//!     VertexData::new([0.0, 1.0, 0.0], n, [0.0, 1.0]),
//! ];
//! let indices = vec![0, 1, 2, 2, 3, 0];
//! let faces = faces_from_indices(&indices);
//! let mesh = Mesh::new(gl, vertices, indices, faces, Vec::new(), Some(MeshInfo::default()))?;
//! mesh.render(&program, true);
//! # Ok(())
//! # }
//! ```

pub mod engine;

pub use engine::*;
