use bytemuck::{Pod, Zeroable};

use super::vertex::{LineVertexData, RectVertexData, TextureVertexData, VertexNumber};

/// Four vertices of one quad, in winding order
/// top-left, top-right, bottom-right, bottom-left.
///
/// A quad is a plain value: updates go through [`with_vertex`](Self::with_vertex)
/// or [`with_all`](Self::with_all) and return a new quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quad<V> {
    vertex1: V,
    vertex2: V,
    vertex3: V,
    vertex4: V,
}

// SAFETY: `repr(C)` with four fields of the same `Pod` type has no padding.
unsafe impl<V: Zeroable> Zeroable for Quad<V> {}
unsafe impl<V: Pod> Pod for Quad<V> {}

pub type RectGpuData = Quad<RectVertexData>;
pub type LineGpuData = Quad<LineVertexData>;
pub type TextureGpuData = Quad<TextureVertexData>;

impl<V: Copy> Quad<V> {
    #[inline]
    pub const fn new(vertex1: V, vertex2: V, vertex3: V, vertex4: V) -> Self {
        Self { vertex1, vertex2, vertex3, vertex4 }
    }

    /// Quad whose four vertices are identical.
    #[inline]
    pub const fn splat(v: V) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub fn vertex1(&self) -> V {
        self.vertex1
    }

    #[inline]
    pub fn vertex2(&self) -> V {
        self.vertex2
    }

    #[inline]
    pub fn vertex3(&self) -> V {
        self.vertex3
    }

    #[inline]
    pub fn vertex4(&self) -> V {
        self.vertex4
    }

    #[inline]
    pub fn vertex(&self, n: VertexNumber) -> V {
        match n {
            VertexNumber::One => self.vertex1,
            VertexNumber::Two => self.vertex2,
            VertexNumber::Three => self.vertex3,
            VertexNumber::Four => self.vertex4,
        }
    }

    #[inline]
    pub fn vertices(&self) -> [V; 4] {
        [self.vertex1, self.vertex2, self.vertex3, self.vertex4]
    }

    /// Returns a copy with vertex `n` replaced by `f(vertex)`.
    #[inline]
    pub fn with_vertex(self, n: VertexNumber, f: impl FnOnce(V) -> V) -> Self {
        let mut out = self;
        match n {
            VertexNumber::One => out.vertex1 = f(self.vertex1),
            VertexNumber::Two => out.vertex2 = f(self.vertex2),
            VertexNumber::Three => out.vertex3 = f(self.vertex3),
            VertexNumber::Four => out.vertex4 = f(self.vertex4),
        }
        out
    }

    /// Applies `f` to vertices 1, 2, 3, 4 in that order.
    #[inline]
    pub fn with_all(self, f: impl Fn(V) -> V) -> Self {
        VertexNumber::ALL
            .into_iter()
            .fold(self, |quad, n| quad.with_vertex(n, &f))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn numbered_getters_match_selector_lookup() {
        let q = Quad::new(10, 20, 30, 40);
        assert_eq!([q.vertex1(), q.vertex2(), q.vertex3(), q.vertex4()], q.vertices());
        for n in VertexNumber::ALL {
            assert_eq!(q.vertex(n), q.vertices()[n.index()]);
        }
    }

    #[test]
    fn with_vertex_touches_only_the_addressed_corner() {
        let q = Quad::new(1, 2, 3, 4).with_vertex(VertexNumber::Three, |v| v * 10);
        assert_eq!(q.vertices(), [1, 2, 30, 4]);
    }

    #[test]
    fn with_all_visits_in_order() {
        let order = RefCell::new(Vec::new());
        let q = Quad::new(1, 2, 3, 4).with_all(|v| {
            order.borrow_mut().push(v);
            v + 100
        });
        assert_eq!(*order.borrow(), vec![1, 2, 3, 4]);
        assert_eq!(q.vertices(), [101, 102, 103, 104]);
    }

    #[test]
    fn quad_size_is_four_records() {
        assert_eq!(std::mem::size_of::<RectGpuData>(), 4 * 64);
        assert_eq!(std::mem::size_of::<LineGpuData>(), 4 * 24);
        assert_eq!(std::mem::size_of::<TextureGpuData>(), 4 * 32);
    }
}
