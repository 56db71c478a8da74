//! # blocks-text
//!
//! Glyph atlas construction and text layout. A caller-owned font blob
//! goes in; out comes a single-channel coverage bitmap packed with a
//! contiguous character range, plus per-character metrics, plus a
//! layout step that turns strings into textured quads a renderer can
//! upload directly.
//!
//! ## Architecture
//!
//! ```text
//! font bytes ──► FontFace (fontdue) ──► RasterGlyph per char
//!                                            │
//!                     ShelfPacker / SkylinePacker (placement)
//!                                            │
//!                                            ▼
//!                 GlyphAtlas { pixels, Vec<GlyphMetrics> }
//!                                            │
//!         layout_text(str, pen) ──► TextLayout { Vec<GlyphQuad> }
//!                                            │
//!                              to_vertices() ──► Vec<TextVertex>
//! ```
//!
//! - **`font`** — font parsing and oversampled rasterization.
//! - **`pack`** — deterministic rectangle packers, no pixels involved.
//! - **`atlas`** — build-once atlas with the per-character table.
//! - **`layout`** — pen-based layout, the single y-flip boundary.
//! - **`cache`** — LRU reuse for repeatedly laid-out strings.

pub mod atlas;
pub mod cache;
pub mod font;
pub mod layout;
pub mod pack;

// Re-exports for ergonomic use.
pub use atlas::{AtlasConfig, AtlasRegion, GlyphAtlas, GlyphMetrics, PackStrategy};
pub use cache::LayoutCache;
pub use font::{FontFace, RasterGlyph};
pub use layout::{layout_text, GlyphQuad, TextLayout, VERTICES_PER_GLYPH};

use thiserror::Error;

/// Everything that can go wrong building an atlas or laying out text.
#[derive(Error, Debug, PartialEq)]
pub enum TextError {
    #[error("font parse failed: {reason}")]
    FontLoad { reason: &'static str },
    #[error("atlas character range is empty")]
    EmptyCharRange,
    #[error("character range crosses unmappable code point {code:#x}")]
    InvalidCharRange { code: u32 },
    #[error("glyph '{character}' ({width}x{height} px) does not fit in the atlas")]
    AtlasOverflow {
        character: char,
        width: u32,
        height: u32,
    },
    #[error("text of {len} chars exceeds the configured maximum of {max}")]
    TextTooLong { len: usize, max: usize },
}
