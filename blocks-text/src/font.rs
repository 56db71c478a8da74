//! Font parsing and glyph rasterization over `fontdue`.
//!
//! The font arrives as a caller-owned byte blob; nothing here touches
//! the filesystem or enumerates system fonts.

use fontdue::{Font, FontSettings};

use crate::TextError;

/// A parsed font, ready to rasterize glyphs.
pub struct FontFace {
    font: Font,
}

/// One rasterized glyph: a tight coverage bitmap plus the metrics to
/// place it relative to the pen.
///
/// With oversampling the bitmap is the enlarged footprint while `xoff`,
/// `yoff` and `advance` stay display-scale, so consumers draw at the
/// intended size and let texture filtering spend the extra resolution.
#[derive(Clone, Debug)]
pub struct RasterGlyph {
    /// Bitmap width in pixels.
    pub width: usize,
    /// Bitmap height in pixels.
    pub height: usize,
    /// Coverage, one byte per pixel, rows top-down.
    pub coverage: Vec<u8>,
    /// Display-space offset from the pen to the bitmap's left edge.
    pub xoff: f32,
    /// Display-space offset from the baseline to the bitmap's top,
    /// y-down (negative above the baseline).
    pub yoff: f32,
    /// Display-space horizontal advance.
    pub advance: f32,
}

impl FontFace {
    /// Parse a TrueType/OpenType blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|reason| TextError::FontLoad { reason })?;
        log::debug!("font parsed: {} glyphs", font.glyph_count());
        Ok(Self { font })
    }

    /// Whether the font maps `c` to a real glyph rather than the
    /// notdef box.
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    /// Horizontal advance of `c` at `px`, without rasterizing.
    pub fn advance(&self, c: char, px: f32) -> f32 {
        self.font.metrics(c, px).advance_width
    }

    /// Baseline-to-top ascent at `px`, when the font reports one.
    pub fn ascent(&self, px: f32) -> Option<f32> {
        self.font.horizontal_line_metrics(px).map(|m| m.ascent)
    }

    /// Rasterize `c` at `px` with per-axis oversampling factors.
    ///
    /// Rasterizes once at `lcm(ox, oy)` times the size, then
    /// box-filters each axis down to its own factor, so unequal
    /// factors come out exact over a uniform rasterizer. Factors below
    /// 1 behave as 1; equal factors skip the filter entirely.
    pub fn rasterize(&self, c: char, px: f32, ox: u32, oy: u32) -> RasterGlyph {
        let ox = ox.max(1);
        let oy = oy.max(1);
        let r = lcm(ox, oy);

        let (metrics, coverage) = self.font.rasterize(c, px * r as f32);
        let advance = self.font.metrics(c, px).advance_width;

        let inv_r = 1.0 / r as f32;
        let xoff = metrics.xmin as f32 * inv_r;
        let yoff = -((metrics.height as i32 + metrics.ymin) as f32) * inv_r;

        let (width, height, coverage) = downsample(
            &coverage,
            metrics.width,
            metrics.height,
            (r / ox) as usize,
            (r / oy) as usize,
        );

        RasterGlyph {
            width,
            height,
            coverage,
            xoff,
            yoff,
            advance,
        }
    }
}

// ---------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------

/// Box-filter `src` (w × h) by averaging `gx` × `gy` blocks. Edge
/// blocks average over the pixels actually present.
fn downsample(src: &[u8], w: usize, h: usize, gx: usize, gy: usize) -> (usize, usize, Vec<u8>) {
    if gx == 1 && gy == 1 {
        return (w, h, src.to_vec());
    }
    if w == 0 || h == 0 {
        return (0, 0, Vec::new());
    }

    let out_w = w.div_ceil(gx);
    let out_h = h.div_ceil(gy);
    let mut out = vec![0u8; out_w * out_h];

    for by in 0..out_h {
        for bx in 0..out_w {
            let mut sum = 0u32;
            let mut count = 0u32;
            for y in (by * gy)..((by * gy + gy).min(h)) {
                for x in (bx * gx)..((bx * gx + gx).min(w)) {
                    sum += src[y * w + x] as u32;
                    count += 1;
                }
            }
            out[by * out_w + bx] = (sum / count) as u8;
        }
    }

    (out_w, out_h, out)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u32, b: u32) -> u32 {
    a / gcd(a, b) * b
}

// ===================================================================
// Tests
// ===================================================================
