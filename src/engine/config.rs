use std::path::Path;
use serde::{ Deserialize, Serialize };

use crate::engine::error::MeshResult;

/// Usage hint handed to the driver when a buffer is (re)uploaded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BufferUsage {
    #[default]
    Static,
    Dynamic,
    Stream,
}

impl BufferUsage {
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::Static => glow::STATIC_DRAW,
            BufferUsage::Dynamic => glow::DYNAMIC_DRAW,
            BufferUsage::Stream => glow::STREAM_DRAW,
        }
    }
}

/// Shader attribute locations for the five `VertexData` fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeLocations {
    pub position: u32,
    pub normal: u32,
    pub tex_coord: u32,
    pub tangent: u32,
    pub bitangent: u32,
}

impl Default for AttributeLocations {
    fn default() -> Self {
        Self {
            position: 0,
            normal: 1,
            tex_coord: 2,
            tangent: 3,
            bitangent: 4,
        }
    }
}

/// Uniform names the material block is written to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialUniforms {
    pub shininess: String,
    pub dissolve: String,
    pub refractive_index: String,
    pub illum: String,
    pub ambient: String,
    pub diffuse: String,
    pub specular: String,
    pub emission: String,
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self {
            shininess: "material.shininess".to_string(),
            dissolve: "material.dissolve".to_string(),
            refractive_index: "material.refractiveIndex".to_string(),
            illum: "material.illum".to_string(),
            ambient: "material.ambient".to_string(),
            diffuse: "material.diffuse".to_string(),
            specular: "material.specular".to_string(),
            emission: "material.emission".to_string(),
        }
    }
}

/// Per-mesh GPU setup: where attributes go, what the material uniforms are
/// called and how buffers are uploaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MeshConfig {
    pub attributes: AttributeLocations,
    pub uniforms: MaterialUniforms,
    pub vertex_usage: BufferUsage,
    pub index_usage: BufferUsage,
}

impl MeshConfig {
    pub fn from_json_str(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> MeshResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded mesh config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> MeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
