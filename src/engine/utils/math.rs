use serde::{ Deserialize, Serialize };

use crate::engine::components::vertex::VertexData;

pub type Vec2 = [f32; 2];
pub type Vec3 = [f32; 3];

const EPSILON: f32 = 1.0e-8;

pub fn vec3_add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn vec3_sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn vec3_scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn vec3_dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn vec3_cross(a: Vec3, b: Vec3) -> Vec3 {
    [a[1] * b[2] - a[2] * b[1], a[2] * b[0] - a[0] * b[2], a[0] * b[1] - a[1] * b[0]]
}

pub fn vec3_length(v: Vec3) -> f32 {
    vec3_dot(v, v).sqrt()
}

/// Returns the zero vector unchanged instead of producing NaNs.
pub fn vec3_normalize(v: Vec3) -> Vec3 {
    let len = vec3_length(v);
    if len <= EPSILON {
        v
    } else {
        vec3_scale(v, 1.0 / len)
    }
}

pub fn vec3_min(a: Vec3, b: Vec3) -> Vec3 {
    [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])]
}

pub fn vec3_max(a: Vec3, b: Vec3) -> Vec3 {
    [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])]
}

/// Axis-aligned bounding box.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(
            points.fold(Self { min: first, max: first }, |aabb, p| Self {
                min: vec3_min(aabb.min, p),
                max: vec3_max(aabb.max, p),
            })
        )
    }

    pub fn center(&self) -> Vec3 {
        vec3_scale(vec3_add(self.min, self.max), 0.5)
    }

    pub fn extents(&self) -> Vec3 {
        vec3_sub(self.max, self.min)
    }
}

/// Fills in `tangent` and `bitangent` for every vertex from positions and
/// texture coordinates of the triangles in `indices`.
///
/// Per-triangle tangents are accumulated on each corner, then the tangent is
/// Gram-Schmidt orthogonalised against the vertex normal. Triangles with a
/// degenerate UV mapping contribute nothing. Out-of-range triangles and a
/// trailing incomplete triangle are skipped.
pub fn compute_tangent_space(vertices: &mut [VertexData], indices: &[u32]) {
    let mut tangents = vec![[0.0f32; 3]; vertices.len()];
    let mut bitangents = vec![[0.0f32; 3]; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if i0 >= vertices.len() || i1 >= vertices.len() || i2 >= vertices.len() {
            continue;
        }
        let (v0, v1, v2) = (&vertices[i0], &vertices[i1], &vertices[i2]);

        let edge1 = vec3_sub(v1.position, v0.position);
        let edge2 = vec3_sub(v2.position, v0.position);
        let duv1 = [v1.tex_coord[0] - v0.tex_coord[0], v1.tex_coord[1] - v0.tex_coord[1]];
        let duv2 = [v2.tex_coord[0] - v0.tex_coord[0], v2.tex_coord[1] - v0.tex_coord[1]];

        let det = duv1[0] * duv2[1] - duv2[0] * duv1[1];
        if det.abs() <= EPSILON {
            continue;
        }
        let r = 1.0 / det;

        let tangent = vec3_scale(vec3_sub(vec3_scale(edge1, duv2[1]), vec3_scale(edge2, duv1[1])), r);
        let bitangent = vec3_scale(vec3_sub(vec3_scale(edge2, duv1[0]), vec3_scale(edge1, duv2[0])), r);

        for &i in &[i0, i1, i2] {
            tangents[i] = vec3_add(tangents[i], tangent);
            bitangents[i] = vec3_add(bitangents[i], bitangent);
        }
    }

    for (vertex, (t, b)) in vertices.iter_mut().zip(tangents.into_iter().zip(bitangents)) {
        let n = vertex.normal;
        let t = vec3_normalize(vec3_sub(t, vec3_scale(n, vec3_dot(n, t))));
        vertex.tangent = t;
        vertex.bitangent = vec3_normalize(b);
    }
}
