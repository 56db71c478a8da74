//! Bounded CPU-side accumulator for debug lines and point markers.
//!
//! Vertices are interleaved as [`LineVertex`] (position + palette color
//! index, 4 floats), the stride a GL consumer draws with `GL_LINES`:
//! two vertices per segment.

use crate::vertex::LineVertex;
use crate::BufferError;

/// Accumulates line segments up to a fixed capacity.
///
/// Capacity is in segments, not vertices. Overflow is reported as an
/// error and leaves the batch unchanged; `clear` resets the batch for
/// per-frame reuse without dropping the allocation.
pub struct LineBatch {
    max_lines: usize,
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            vertices: Vec::with_capacity(max_lines * 2),
        }
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Segments still available before the batch is full.
    pub fn remaining(&self) -> usize {
        self.max_lines - self.line_count()
    }

    /// Append one segment from `a` to `b`.
    pub fn push_line(
        &mut self,
        a: [f32; 3],
        b: [f32; 3],
        color_index: u32,
    ) -> Result<(), BufferError> {
        self.ensure_room(1)?;
        self.vertices.push(LineVertex::new(a[0], a[1], a[2], color_index));
        self.vertices.push(LineVertex::new(b[0], b[1], b[2], color_index));
        Ok(())
    }

    /// Append the six-segment cross marker for a point: one segment
    /// from each of the ±x/±y/±z offsets back to the center.
    pub fn push_point(
        &mut self,
        center: [f32; 3],
        color_index: u32,
        side: f32,
    ) -> Result<(), BufferError> {
        self.ensure_room(6)?;
        let [x, y, z] = center;
        let tips = [
            [x + side, y, z],
            [x - side, y, z],
            [x, y + side, z],
            [x, y - side, z],
            [x, y, z + side],
            [x, y, z - side],
        ];
        for tip in tips {
            self.vertices.push(LineVertex::new(tip[0], tip[1], tip[2], color_index));
            self.vertices.push(LineVertex::new(x, y, z, color_index));
        }
        Ok(())
    }

    /// Drop all segments, keeping the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn ensure_room(&self, lines: usize) -> Result<(), BufferError> {
        if self.line_count() + lines > self.max_lines {
            return Err(BufferError::BatchFull {
                capacity: self.max_lines,
            });
        }
        Ok(())
    }
}

// ===================================================================
// Tests
// ===================================================================
