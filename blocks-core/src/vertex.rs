//! GPU-bound vertex types shared across the workspace.
//!
//! All types are `#[repr(C)]` and derive `bytemuck::Pod` + `Zeroable`
//! so batches can be uploaded to vertex buffers without copies.

use bytemuck::{Pod, Zeroable};

// ───────────────────────────────────────────────────────────────────
// Textured vertex
// ───────────────────────────────────────────────────────────────────

/// A single textured vertex: position + atlas UV.
///
/// 5 floats (20 bytes). Text quads flatten to this stride; a GLES2
/// consumer points the position attribute at offset 0 and the UV
/// attribute at offset 12, both with a 20-byte stride.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Atlas texture coordinate.
    pub uv: [f32; 2],
}

impl TextVertex {
    /// Floats per vertex (position + uv).
    pub const FLOATS: usize = 5;

    pub fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, z],
            uv: [u, v],
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Line vertex
// ───────────────────────────────────────────────────────────────────

/// A single line vertex: position + palette color index.
///
/// The color index selects into a small palette on the shader side.
/// It travels as a float because GLES2 has no integer attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Palette index, renderer-defined.
    pub color_index: f32,
}

impl LineVertex {
    /// Floats per vertex (position + color index).
    pub const FLOATS: usize = 4;

    pub fn new(x: f32, y: f32, z: f32, color_index: u32) -> Self {
        Self {
            position: [x, y, z],
            color_index: color_index as f32,
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
