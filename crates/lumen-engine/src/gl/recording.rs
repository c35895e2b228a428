use std::cell::{Cell, RefCell};

use crate::error::{RenderError, Result};

use super::{BufferTarget, BufferUsage, Gl, ObjectKind, TextureParam, VertexAttrib};

/// One call observed by [`RecordingGl`].
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateVertexArray(u32),
    CreateBuffer(u32),
    CreateTexture(u32),
    BindVertexArray(u32),
    BindBuffer(BufferTarget, u32),
    BindTexture(u32),
    ActiveTexture(u32),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
    DeleteTexture(u32),
    BufferData { target: BufferTarget, data: Vec<u8>, usage: BufferUsage },
    BufferSubData { target: BufferTarget, offset: usize, data: Vec<u8> },
    EnableVertexAttribArray(u32),
    VertexAttribPointer(VertexAttrib),
    TexParameter(TextureParam),
    TexImage2d { width: u32, height: u32, pixels: Vec<u8> },
    UseProgram(u32),
    DrawElements(u32),
    PushDebugGroup(String),
    PopDebugGroup,
    ObjectLabel(ObjectKind, u32, String),
}

/// Headless [`Gl`] that hands out sequential names and records every call.
///
/// Used by the test suites and by tooling that wants to inspect the exact
/// command stream a frame produces without a real context.
#[derive(Debug)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_name: Cell<u32>,
    fail_creation: Cell<bool>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            fail_creation: Cell::new(false),
        }
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Makes every following `create_*` call fail.
    pub fn fail_object_creation(&self, fail: bool) {
        self.fail_creation.set(fail);
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next(&self, what: &str) -> Result<u32> {
        if self.fail_creation.get() {
            return Err(RenderError::Gl(format!("failed to create {what}")));
        }
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        Ok(name)
    }
}

impl Gl for RecordingGl {
    fn create_vertex_array(&self) -> Result<u32> {
        let name = self.next("vertex array")?;
        self.record(GlCall::CreateVertexArray(name));
        Ok(name)
    }

    fn create_buffer(&self) -> Result<u32> {
        let name = self.next("buffer")?;
        self.record(GlCall::CreateBuffer(name));
        Ok(name)
    }

    fn create_texture(&self) -> Result<u32> {
        let name = self.next("texture")?;
        self.record(GlCall::CreateTexture(name));
        Ok(name)
    }

    fn bind_vertex_array(&self, vao: u32) {
        self.record(GlCall::BindVertexArray(vao));
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: u32) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn bind_texture(&self, texture: u32) {
        self.record(GlCall::BindTexture(texture));
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(GlCall::DeleteVertexArray(vao));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn delete_texture(&self, texture: u32) {
        self.record(GlCall::DeleteTexture(texture));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(GlCall::BufferData { target, data: data.to_vec(), usage });
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        self.record(GlCall::BufferSubData { target, offset, data: data.to_vec() });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer(&self, attrib: VertexAttrib) {
        self.record(GlCall::VertexAttribPointer(attrib));
    }

    fn tex_parameter(&self, param: TextureParam) {
        self.record(GlCall::TexParameter(param));
    }

    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: &[u8]) {
        self.record(GlCall::TexImage2d { width, height, pixels: pixels.to_vec() });
    }

    fn use_program(&self, program: u32) {
        self.record(GlCall::UseProgram(program));
    }

    fn draw_elements(&self, index_count: u32) {
        self.record(GlCall::DrawElements(index_count));
    }

    fn push_debug_group(&self, message: &str) {
        self.record(GlCall::PushDebugGroup(message.to_string()));
    }

    fn pop_debug_group(&self) {
        self.record(GlCall::PopDebugGroup);
    }

    fn object_label(&self, kind: ObjectKind, handle: u32, label: &str) {
        self.record(GlCall::ObjectLabel(kind, handle, label.to_string()));
    }
}
