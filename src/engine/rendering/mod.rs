pub mod device;
pub mod shader;

pub use device::{ BufferTarget, GpuDevice };
pub use shader::{ GlShaderProgram, ShaderProgram };
