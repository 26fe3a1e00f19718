#![allow(dead_code)]

use std::cell::{ Cell, RefCell };

use glmesh::{ BufferTarget, BufferUsage, GpuDevice, ShaderProgram, VertexAttribute, VertexData };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexArray(Handle),
    DeleteVertexArray(Handle),
    BindVertexArray(Option<Handle>),
    CreateBuffer(Handle),
    DeleteBuffer(Handle),
    Upload {
        target: BufferTarget,
        buffer: Handle,
        bytes: usize,
        usage: BufferUsage,
    },
    Attribute {
        location: u32,
        components: i32,
        offset: usize,
        stride: usize,
    },
    BindTexture {
        unit: u32,
        texture: Handle,
    },
    Draw(usize),
}

/// GPU stand-in that hands out sequential handles and records every call.
#[derive(Default)]
pub struct RecordingDevice {
    next_handle: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    /// Fail every buffer creation after this many succeeded.
    pub buffer_budget: Cell<Option<usize>>,
    buffers_created: Cell<usize>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> Handle {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        Handle(id)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn uploads(&self) -> Vec<(BufferTarget, usize)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Upload { target, bytes, .. } => Some((*target, *bytes)),
                _ => None,
            })
            .collect()
    }

    pub fn draws(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Draw(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GpuDevice for RecordingDevice {
    type VertexArray = Handle;
    type Buffer = Handle;
    type Texture = Handle;

    fn create_vertex_array(&self) -> Result<Handle, String> {
        let h = self.next();
        self.record(Call::CreateVertexArray(h));
        Ok(h)
    }

    fn delete_vertex_array(&self, vertex_array: Handle) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: Option<Handle>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<Handle, String> {
        if let Some(budget) = self.buffer_budget.get() {
            if self.buffers_created.get() >= budget {
                return Err("out of memory".to_string());
            }
        }
        self.buffers_created.set(self.buffers_created.get() + 1);
        let h = self.next();
        self.record(Call::CreateBuffer(h));
        Ok(h)
    }

    fn delete_buffer(&self, buffer: Handle) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn upload_buffer(&self, target: BufferTarget, buffer: Handle, data: &[u8], usage: BufferUsage) {
        self.record(Call::Upload {
            target,
            buffer,
            bytes: data.len(),
            usage,
        });
    }

    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: usize) {
        self.record(Call::Attribute {
            location: attribute.location,
            components: attribute.components,
            offset: attribute.offset,
            stride,
        });
    }

    fn bind_texture(&self, unit: u32, texture: Handle) {
        self.record(Call::BindTexture { unit, texture });
    }

    fn draw_indexed_triangles(&self, index_count: usize) {
        self.record(Call::Draw(index_count));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Uniform {
    Int(i32),
    Float(f32),
    Vec3([f32; 3]),
}

/// Shader program stand-in recording uniform writes in order.
#[derive(Default)]
pub struct RecordingProgram {
    pub binds: Cell<usize>,
    pub uniforms: RefCell<Vec<(String, Uniform)>>,
    /// Uniform names the program reports as undeclared.
    pub missing: RefCell<Vec<String>>,
}

impl RecordingProgram {
    pub fn without(names: &[&str]) -> Self {
        let program = Self::default();
        program.missing.borrow_mut().extend(names.iter().map(|n| n.to_string()));
        program
    }

    pub fn names(&self) -> Vec<String> {
        self.uniforms.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Uniform> {
        self.uniforms
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, u)| u.clone())
    }
}

impl ShaderProgram for RecordingProgram {
    fn bind(&self) {
        self.binds.set(self.binds.get() + 1);
    }

    fn has_uniform(&self, name: &str) -> bool {
        !self.missing.borrow().iter().any(|n| n == name)
    }

    fn set_int(&self, name: &str, value: i32) {
        self.uniforms.borrow_mut().push((name.to_string(), Uniform::Int(value)));
    }

    fn set_float(&self, name: &str, value: f32) {
        self.uniforms.borrow_mut().push((name.to_string(), Uniform::Float(value)));
    }

    fn set_vec3(&self, name: &str, value: [f32; 3]) {
        self.uniforms.borrow_mut().push((name.to_string(), Uniform::Vec3(value)));
    }
}

pub fn init_logging() {
    glmesh::logging::init_for_tests();
}

pub fn quad_vertices() -> Vec<VertexData> {
    let n = [0.0, 0.0, 1.0];
    vec![
        VertexData::new([0.0, 0.0, 0.0], n, [0.0, 0.0]),
        VertexData::new([1.0, 0.0, 0.0], n, [1.0, 0.0]),
        VertexData::new([1.0, 1.0, 0.0], n, [1.0, 1.0]),
        VertexData::new([0.0, 1.0, 0.0], n, [0.0, 1.0])
    ]
}

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];
