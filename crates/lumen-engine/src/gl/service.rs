use std::cell::Cell;
use std::rc::Rc;

use super::{BufferTarget, Gl, ObjectKind};

/// Features the current context exposes to diagnostics tooling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlCapabilities {
    /// `KHR_debug` style groups and object labels are available.
    ///
    /// When disabled, group and label calls are dropped before reaching GL.
    pub debug_output: bool,
}

impl Default for GlCapabilities {
    fn default() -> Self {
        Self { debug_output: true }
    }
}

/// Bind/unbind helpers, debug groups and object labels on top of [`Gl`].
///
/// Tracks how many debug groups are open so a failed setup can close them.
pub struct GlService {
    gl: Rc<dyn Gl>,
    caps: GlCapabilities,
    group_depth: Cell<u32>,
}

impl GlService {
    pub fn new(gl: Rc<dyn Gl>, caps: GlCapabilities) -> Self {
        Self { gl, caps, group_depth: Cell::new(0) }
    }

    #[inline]
    pub fn capabilities(&self) -> GlCapabilities {
        self.caps
    }

    #[inline]
    pub fn gl(&self) -> &Rc<dyn Gl> {
        &self.gl
    }

    // ── binding ───────────────────────────────────────────────────────────

    pub fn bind_vao(&self, vao: u32) {
        self.gl.bind_vertex_array(vao);
    }

    pub fn unbind_vao(&self) {
        self.bind_vao(0);
    }

    pub fn bind_vbo(&self, vbo: u32) {
        self.gl.bind_buffer(BufferTarget::Array, vbo);
    }

    pub fn unbind_vbo(&self) {
        self.bind_vbo(0);
    }

    pub fn bind_ebo(&self, ebo: u32) {
        self.gl.bind_buffer(BufferTarget::ElementArray, ebo);
    }

    pub fn unbind_ebo(&self) {
        self.bind_ebo(0);
    }

    pub fn bind_texture_2d(&self, texture: u32) {
        self.gl.bind_texture(texture);
    }

    pub fn unbind_texture_2d(&self) {
        self.gl.bind_texture(0);
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    /// Number of currently open debug groups.
    #[inline]
    pub fn group_depth(&self) -> u32 {
        self.group_depth.get()
    }

    /// Opens a named debug group. Must be balanced by [`end_group`](Self::end_group).
    pub fn begin_group(&self, name: &str) {
        if !self.caps.debug_output {
            return;
        }
        self.gl.push_debug_group(name);
        self.group_depth.set(self.group_depth.get() + 1);
    }

    pub fn end_group(&self) {
        if !self.caps.debug_output {
            return;
        }
        let depth = self.group_depth.get();
        if depth == 0 {
            log::warn!("end_group called with no open debug group");
            return;
        }
        self.gl.pop_debug_group();
        self.group_depth.set(depth - 1);
    }

    pub fn label_vertex_array(&self, vao: u32, label: &str) {
        self.label(ObjectKind::VertexArray, vao, label);
    }

    pub fn label_buffer(&self, buffer: u32, label: &str) {
        self.label(ObjectKind::Buffer, buffer, label);
    }

    pub fn label_texture(&self, texture: u32, label: &str) {
        self.label(ObjectKind::Texture, texture, label);
    }

    fn label(&self, kind: ObjectKind, handle: u32, label: &str) {
        if self.caps.debug_output && !label.is_empty() {
            self.gl.object_label(kind, handle, label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{GlCall, RecordingGl};

    fn service(debug_output: bool) -> (Rc<RecordingGl>, GlService) {
        let gl = Rc::new(RecordingGl::new());
        let svc = GlService::new(gl.clone(), GlCapabilities { debug_output });
        (gl, svc)
    }

    #[test]
    fn bind_helpers_hit_their_targets() {
        let (gl, svc) = service(true);
        svc.bind_vao(3);
        svc.bind_vbo(4);
        svc.bind_ebo(5);
        svc.unbind_vbo();

        assert_eq!(
            gl.calls(),
            vec![
                GlCall::BindVertexArray(3),
                GlCall::BindBuffer(BufferTarget::Array, 4),
                GlCall::BindBuffer(BufferTarget::ElementArray, 5),
                GlCall::BindBuffer(BufferTarget::Array, 0),
            ]
        );
    }

    #[test]
    fn group_depth_follows_begin_and_end() {
        let (_, svc) = service(true);
        svc.begin_group("a");
        svc.begin_group("b");
        assert_eq!(svc.group_depth(), 2);
        svc.end_group();
        assert_eq!(svc.group_depth(), 1);
    }

    #[test]
    fn groups_and_labels_dropped_without_debug_output() {
        let (gl, svc) = service(false);
        svc.begin_group("x");
        svc.label_buffer(1, "x");
        svc.end_group();
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn unbalanced_end_group_is_ignored() {
        let (gl, svc) = service(true);
        svc.end_group();
        svc.begin_group("a");
        svc.end_group();
        assert_eq!(
            gl.calls(),
            vec![GlCall::PushDebugGroup("a".into()), GlCall::PopDebugGroup]
        );
    }
}
