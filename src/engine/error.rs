use std::io;

/// Everything that can go wrong while building, updating or drawing a mesh.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("GPU resource creation failed: {0}")]
    Gpu(String),
    #[error("{stage} shader compile error: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("shader program link error: {0}")]
    ProgramLink(String),
    #[error("invalid mesh config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub type MeshResult<T> = Result<T, MeshError>;
