//! Interleaved vertex buffers with typed per-vertex access.
//!
//! `MeshBuffer` keeps vertex data exactly as a GL consumer uploads it
//! (one flat `f32` array, attributes interleaved per vertex), while
//! `VertexView` gives callers named accessors instead of manual stride
//! arithmetic.

use crate::BufferError;

/// Which attributes each vertex carries. Position is always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub has_normals: bool,
    pub has_uvs: bool,
}

impl VertexLayout {
    /// Position only, stride 3.
    pub const POSITION_ONLY: Self = Self {
        has_normals: false,
        has_uvs: false,
    };

    /// Position + normal + uv, stride 8.
    pub const FULL: Self = Self {
        has_normals: true,
        has_uvs: true,
    };

    pub fn new(has_normals: bool, has_uvs: bool) -> Self {
        Self {
            has_normals,
            has_uvs,
        }
    }

    /// Floats per vertex.
    pub fn stride(&self) -> usize {
        let mut stride = 3;
        if self.has_normals {
            stride += 3;
        }
        if self.has_uvs {
            stride += 2;
        }
        stride
    }

    /// Float offset of the normal within a vertex, when present.
    pub fn normal_offset(&self) -> Option<usize> {
        self.has_normals.then_some(3)
    }

    /// Float offset of the uv within a vertex, when present.
    pub fn uv_offset(&self) -> Option<usize> {
        self.has_uvs
            .then_some(if self.has_normals { 6 } else { 3 })
    }
}

/// Flat interleaved vertex buffer.
///
/// The invariant `data.len() == vertex_count * layout.stride()` is
/// checked at construction and holds for the lifetime of the buffer.
/// The buffer is immutable once built; consumers upload `as_bytes()`
/// directly.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    layout: VertexLayout,
    vertex_count: usize,
    data: Vec<f32>,
}

impl MeshBuffer {
    /// Wrap an interleaved float array.
    ///
    /// Fails unless the length is an exact multiple of the layout
    /// stride.
    pub fn from_raw(layout: VertexLayout, data: Vec<f32>) -> Result<Self, BufferError> {
        let stride = layout.stride();
        if data.len() % stride != 0 {
            return Err(BufferError::LengthMismatch {
                len: data.len(),
                stride,
            });
        }
        Ok(Self {
            layout,
            vertex_count: data.len() / stride,
            data,
        })
    }

    /// An empty buffer with the given layout.
    pub fn empty(layout: VertexLayout) -> Self {
        Self {
            layout,
            vertex_count: 0,
            data: Vec::new(),
        }
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Floats per vertex.
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// The raw interleaved floats.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes, for direct buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Typed view of vertex `index`.
    ///
    /// Panics if `index >= vertex_count()`, like slice indexing.
    pub fn vertex(&self, index: usize) -> VertexView<'_> {
        let stride = self.layout.stride();
        let start = index * stride;
        VertexView {
            data: &self.data[start..start + stride],
            layout: self.layout,
        }
    }

    /// Iterate over all vertices in order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexView<'_>> + '_ {
        (0..self.vertex_count).map(move |i| self.vertex(i))
    }
}

/// Borrowed view of one interleaved vertex.
#[derive(Clone, Copy)]
pub struct VertexView<'a> {
    data: &'a [f32],
    layout: VertexLayout,
}

impl VertexView<'_> {
    pub fn position(&self) -> [f32; 3] {
        [self.data[0], self.data[1], self.data[2]]
    }

    pub fn normal(&self) -> Option<[f32; 3]> {
        self.layout
            .normal_offset()
            .map(|o| [self.data[o], self.data[o + 1], self.data[o + 2]])
    }

    pub fn uv(&self) -> Option<[f32; 2]> {
        self.layout
            .uv_offset()
            .map(|o| [self.data[o], self.data[o + 1]])
    }

    /// The raw interleaved floats of this vertex.
    pub fn raw(&self) -> &[f32] {
        self.data
    }
}

// ===================================================================
// Tests
// ===================================================================
