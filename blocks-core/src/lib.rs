//! # blocks-core
//!
//! Shared vertex-stream vocabulary for the blocks workspace. Everything
//! downstream of the format crates speaks in the types defined here:
//! flat interleaved float buffers the GL side uploads as-is, plus typed
//! views so callers never do stride arithmetic by hand.
//!
//! ## Architecture
//!
//! ```text
//! blocks-model ──► MeshBuffer { VertexLayout, Vec<f32> } ──► GPU upload
//!                       │
//!                       ▼
//!                  VertexView (position / normal / uv)
//!
//! blocks-text  ──► Vec<TextVertex>  (pos3 + uv2, 5 floats)
//! debug overlay ─► LineBatch { Vec<LineVertex> } (pos3 + color, 4 floats)
//! ```
//!
//! - **`buffer`** — `VertexLayout` stride/offset math, `MeshBuffer`,
//!   per-vertex `VertexView` accessors.
//! - **`vertex`** — `#[repr(C)]` Pod vertex structs for zero-copy upload.
//! - **`lines`** — bounded accumulator for debug lines and point markers.

pub mod buffer;
pub mod lines;
pub mod vertex;

// Re-exports for ergonomic use.
pub use buffer::{MeshBuffer, VertexLayout, VertexView};
pub use lines::LineBatch;
pub use vertex::{LineVertex, TextVertex};

use thiserror::Error;

/// Errors from buffer construction and batch accumulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("data length {len} is not a multiple of vertex stride {stride}")]
    LengthMismatch { len: usize, stride: usize },
    #[error("line batch is full ({capacity} lines)")]
    BatchFull { capacity: usize },
}
