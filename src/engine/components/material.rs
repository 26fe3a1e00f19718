use serde::{ Deserialize, Serialize };

use crate::engine::config::MaterialUniforms;
use crate::engine::rendering::shader::ShaderProgram;
use crate::engine::utils::math::Vec3;

/// Material block of a mesh, Phong coefficients plus the MTL-style
/// transparency, refraction and illumination model selectors.
///
/// A mesh without a material override holds `None` instead of a
/// `MeshInfo`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MeshInfo {
    pub shininess: f32,
    pub dissolve: f32,
    pub refractive_index: f32,
    pub illum: i32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub emission: Vec3,
}

impl Default for MeshInfo {
    fn default() -> Self {
        Self {
            shininess: 32.0,
            dissolve: 1.0,
            refractive_index: 1.0,
            illum: 3,
            ambient: [1.0; 3],
            diffuse: [1.0; 3],
            specular: [1.0; 3],
            emission: [1.0; 3],
        }
    }
}

impl MeshInfo {
    pub fn is_transparent(&self) -> bool {
        self.dissolve < 1.0
    }

    /// Writes every coefficient to the matching uniform of `program`.
    pub fn apply<P: ShaderProgram + ?Sized>(&self, program: &P, uniforms: &MaterialUniforms) {
        program.set_float(&uniforms.shininess, self.shininess);
        program.set_float(&uniforms.dissolve, self.dissolve);
        program.set_float(&uniforms.refractive_index, self.refractive_index);
        program.set_int(&uniforms.illum, self.illum);
        program.set_vec3(&uniforms.ambient, self.ambient);
        program.set_vec3(&uniforms.diffuse, self.diffuse);
        program.set_vec3(&uniforms.specular, self.specular);
        program.set_vec3(&uniforms.emission, self.emission);
    }
}
