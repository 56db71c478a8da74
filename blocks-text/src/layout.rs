//! Text layout — per-character quads from a built atlas.
//!
//! `layout_text` walks the characters of a string left to right,
//! advancing a pen along the baseline and emitting one screen-space
//! quad per character. Positions are y-up (larger y is higher on
//! screen) while atlas UVs keep the bitmap's y-down convention, so a
//! quad's visual top carries `t0` and its bottom `t1`.
//!
//! Characters outside the atlas range fall back to the range's first
//! glyph but still record the original character, so a consumer can
//! tell substitution happened.

use blocks_core::TextVertex;

use crate::atlas::GlyphAtlas;
use crate::TextError;

/// Vertices per glyph quad (two triangles).
pub const VERTICES_PER_GLYPH: usize = 6;

/// One laid-out character.
///
/// `(x0, y0)` is the visual top-left in y-up display space and maps to
/// `(s0, t0)` in the atlas; `(x1, y1)` is the bottom-right and maps to
/// `(s1, t1)`. Since positions are y-up and UVs y-down, `y0 > y1`
/// while `t0 < t1` for any glyph with ink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    pub x0: f32,
    pub y0: f32,
    pub s0: f32,
    pub t0: f32,
    pub x1: f32,
    pub y1: f32,
    pub s1: f32,
    pub t1: f32,
    /// The character this quad renders (the requested one, even when
    /// the fallback glyph was substituted).
    pub character: char,
}

/// The result of laying out one string.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// One quad per character of the input, in order.
    pub quads: Vec<GlyphQuad>,
    /// Total advance of the string in display units.
    pub width: f32,
    /// Baseline origin the layout was anchored at.
    pub pen_x: f32,
    pub pen_y: f32,
}

impl TextLayout {
    /// Expand the quads into a triangle list, two triangles per quad.
    pub fn to_vertices(&self) -> Vec<TextVertex> {
        let mut out = Vec::with_capacity(self.quads.len() * VERTICES_PER_GLYPH);
        for q in &self.quads {
            let tl = TextVertex::new(q.x0, q.y0, 0.0, q.s0, q.t0);
            let tr = TextVertex::new(q.x1, q.y0, 0.0, q.s1, q.t0);
            let br = TextVertex::new(q.x1, q.y1, 0.0, q.s1, q.t1);
            let bl = TextVertex::new(q.x0, q.y1, 0.0, q.s0, q.t1);
            out.extend_from_slice(&[tl, tr, br, br, bl, tl]);
        }
        out
    }
}

/// Lay out `text` against `atlas`, starting the pen at
/// `(pen_x, pen_y)` on the baseline.
///
/// `pen_y` is given in the same y-down sense as glyph `yoff`; the
/// emitted quads are y-up. Fails without output when the character
/// count exceeds the atlas's `max_text_length`.
pub fn layout_text(
    atlas: &GlyphAtlas,
    text: &str,
    pen_x: f32,
    pen_y: f32,
) -> Result<TextLayout, TextError> {
    let len = text.chars().count();
    if len > atlas.max_text_length {
        return Err(TextError::TextTooLong {
            len,
            max: atlas.max_text_length,
        });
    }

    let inv_ox = 1.0 / atlas.oversample_x as f32;
    let inv_oy = 1.0 / atlas.oversample_y as f32;
    let mut quads = Vec::with_capacity(len);
    let mut pen = pen_x;

    for c in text.chars() {
        let metrics = atlas.glyph_or_fallback(c);
        let region = atlas.region(metrics);

        // The rect is the oversampled footprint; on screen it shrinks
        // back by the per-axis factor.
        let w = metrics.width() as f32 * inv_ox;
        let h = metrics.height() as f32 * inv_oy;
        let x0 = pen + metrics.xoff;
        let top = pen_y + metrics.yoff;

        // Bitmap space is y-down; quads are y-up. This negation is the
        // only vertical flip in the pipeline.
        quads.push(GlyphQuad {
            x0,
            y0: -top,
            s0: region.u_min,
            t0: region.v_min,
            x1: x0 + w,
            y1: -(top + h),
            s1: region.u_max,
            t1: region.v_max,
            character: c,
        });
        pen += metrics.advance;
    }

    let width = pen - pen_x;
    log::debug!("laid out {len} chars, width {width}");
    Ok(TextLayout {
        quads,
        width,
        pen_x,
        pen_y,
    })
}

// ===================================================================
// Tests
// ===================================================================
