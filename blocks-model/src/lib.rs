//! # blocks-model
//!
//! Reader and writer for the smodel mesh-interchange format: a plain
//! ASCII container for interleaved vertex data, exported from a DCC
//! pipeline and uploaded to the GPU untouched.
//!
//! ## Architecture
//!
//! ```text
//! &str ──► Tokens (offset-tracking scan)
//!              │
//!              ▼
//!        parse_smodel ──► dialect dispatch on `?` version
//!              │                 1.0 → legacy sections
//!              │                 2.0 → single model
//!              ▼
//!        MeshBuffer { VertexLayout, Vec<f32> }
//!              │
//!              ▼
//!        to_legacy_text / to_single_model_text (round-trip)
//! ```
//!
//! - **`token`** — whitespace tokenizer over read-only input.
//! - **`parser`** — both text dialects, all malformations reported as
//!   typed errors.
//! - **`writer`** — the parser's inverse, bounding boxes recomputed.

pub mod parser;
pub mod token;
pub mod writer;

// Re-exports for ergonomic use.
pub use blocks_core::{MeshBuffer, VertexLayout};
pub use parser::parse_smodel;
pub use writer::{to_legacy_text, to_single_model_text};

use thiserror::Error;

/// Everything that can go wrong reading or writing smodel text.
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("no `?` header before vertex data")]
    MissingHeader,
    #[error("multiple `?` headers in one file")]
    DuplicateHeader,
    #[error("unsupported format version `{0}`")]
    UnsupportedVersion(String),
    #[error("malformed header field `{field}`: `{token}`")]
    InvalidHeader {
        field: &'static str,
        token: String,
    },
    #[error("unexpected end of input reading `{field}`")]
    MissingField { field: &'static str },
    #[error("submodel sections disagree on vertex attributes")]
    MixedAttributes,
    #[error("malformed number `{token}` at byte {offset}")]
    MalformedNumber { token: String, offset: usize },
    #[error("vertex data ended early: expected {expected} floats, found {found}")]
    TruncatedData { expected: usize, found: usize },
    #[error("more vertex data than the header declares ({expected} floats)")]
    ExcessData { expected: usize },
    #[error("single-model text requires the position+normal+uv layout")]
    UnsupportedLayout,
    #[error(transparent)]
    Buffer(#[from] blocks_core::BufferError),
}
