//! Shared vertex/index generation used by all shape buffers.

use bytemuck::Pod;

use crate::gl::{BufferTarget, GlService, VertexAttrib};
use crate::gpu_data::Quad;

// ── indices ───────────────────────────────────────────────────────────────

pub(super) const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Two triangles per quad, offset by four vertices per slot.
pub(super) fn quad_indices(capacity: u32) -> Vec<u32> {
    (0..capacity)
        .flat_map(|slot| QUAD_INDICES.map(|i| i + slot * 4))
        .collect()
}

// ── vertices ──────────────────────────────────────────────────────────────

/// Zero-filled storage for `capacity` quads of `V`.
pub(super) fn zeroed_quads<V: Pod>(capacity: u32) -> Vec<u8> {
    vec![0; capacity as usize * std::mem::size_of::<Quad<V>>()]
}

/// Writes one quad into slot `batch_index` of the bound VBO.
pub(super) fn write_quad<V: Pod>(svc: &GlService, quad: &Quad<V>, batch_index: u32) {
    let offset = batch_index as usize * std::mem::size_of::<Quad<V>>();
    svc.gl()
        .buffer_sub_data(BufferTarget::Array, offset, bytemuck::bytes_of(quad));
}

// ── layout ────────────────────────────────────────────────────────────────

/// Declares consecutive float attributes at locations `0..components.len()`.
pub(super) fn setup_float_attribs(svc: &GlService, stride: i32, components: &[i32]) {
    let gl = svc.gl();
    let mut offset = 0;
    for (index, &n) in components.iter().enumerate() {
        gl.enable_vertex_attrib_array(index as u32);
        gl.vertex_attrib_pointer(VertexAttrib { index: index as u32, components: n, stride, offset });
        offset += n * 4;
    }
    debug_assert_eq!(offset, stride);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu_data::LineVertexData;

    #[test]
    fn indices_follow_quad_pattern() {
        let idx = quad_indices(3);
        assert_eq!(idx.len(), 18);
        assert_eq!(&idx[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&idx[6..12], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(&idx[12..], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn zeroed_storage_covers_capacity() {
        let bytes = zeroed_quads::<LineVertexData>(10);
        assert_eq!(bytes.len(), 10 * 4 * 24);
        assert!(bytes.iter().all(|&b| b == 0));
    }
}
