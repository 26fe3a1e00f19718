pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod rendering;
pub mod utils;

// Re-export all commonly used items for easy access
pub use components::*;
pub use config::{ AttributeLocations, BufferUsage, MaterialUniforms, MeshConfig };
pub use error::{ MeshError, MeshResult, ShaderStage };
pub use rendering::*;
