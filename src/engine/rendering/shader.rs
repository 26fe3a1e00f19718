use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use glow::HasContext;

use crate::engine::error::{ MeshError, MeshResult, ShaderStage };
use crate::engine::utils::math::Vec3;

/// The uniform/sampler surface a mesh needs from a shader program.
///
/// Setting a uniform the program does not declare is a no-op.
pub trait ShaderProgram {
    fn bind(&self);

    /// Whether the program declares an active uniform or sampler `name`.
    fn has_uniform(&self, _name: &str) -> bool {
        true
    }

    fn set_int(&self, name: &str, value: i32);
    fn set_float(&self, name: &str, value: f32);
    fn set_vec3(&self, name: &str, value: Vec3);
}

/// Linked GLSL program. Uniform locations are looked up once per name.
pub struct GlShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
    locations: RefCell<HashMap<String, Option<glow::UniformLocation>>>,
}

fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str
) -> MeshResult<glow::Shader> {
    unsafe {
        let shader = gl.create_shader(stage.gl_kind()).map_err(MeshError::Gpu)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(MeshError::ShaderCompile { stage, log });
        }
        Ok(shader)
    }
}

impl GlShaderProgram {
    pub fn new(
        gl: Rc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str
    ) -> MeshResult<Self> {
        let vs = compile_shader(&gl, ShaderStage::Vertex, vertex_source)?;
        let fs = match compile_shader(&gl, ShaderStage::Fragment, fragment_source) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe {
                    gl.delete_shader(vs);
                }
                return Err(e);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(e) => {
                    gl.delete_shader(vs);
                    gl.delete_shader(fs);
                    return Err(MeshError::Gpu(e));
                }
            };
            gl.attach_shader(program, vs);
            gl.attach_shader(program, fs);
            gl.link_program(program);

            gl.detach_shader(program, vs);
            gl.detach_shader(program, fs);
            gl.delete_shader(vs);
            gl.delete_shader(fs);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(MeshError::ProgramLink(log));
            }

            log::debug!("Linked shader program {:?}", program);
            Ok(Self {
                gl,
                program,
                locations: RefCell::new(HashMap::new()),
            })
        }
    }

    fn location(&self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(cached) = self.locations.borrow().get(name) {
            return cached.clone();
        }
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            log::trace!("Uniform {:?} not found in program {:?}", name, self.program);
        }
        self.locations.borrow_mut().insert(name.to_string(), location.clone());
        location
    }
}

impl ShaderProgram for GlShaderProgram {
    fn bind(&self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }

    fn has_uniform(&self, name: &str) -> bool {
        self.location(name).is_some()
    }

    fn set_int(&self, name: &str, value: i32) {
        if let Some(loc) = self.location(name) {
            unsafe {
                self.gl.uniform_1_i32(Some(&loc), value);
            }
        }
    }

    fn set_float(&self, name: &str, value: f32) {
        if let Some(loc) = self.location(name) {
            unsafe {
                self.gl.uniform_1_f32(Some(&loc), value);
            }
        }
    }

    fn set_vec3(&self, name: &str, value: Vec3) {
        if let Some(loc) = self.location(name) {
            unsafe {
                self.gl.uniform_3_f32(Some(&loc), value[0], value[1], value[2]);
            }
        }
    }
}

impl Drop for GlShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}
