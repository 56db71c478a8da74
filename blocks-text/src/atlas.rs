//! Glyph atlas — CPU-side coverage atlas over a character range.
//!
//! Built once from a font face and immutable afterwards. Glyphs are
//! rasterized in ascending character order and packed with one of the
//! strategies in [`crate::pack`]; placement is therefore deterministic
//! for a given font and config. The bitmap is single-channel coverage
//! (one byte per pixel, rows top-down), which a GLES2 consumer uploads
//! as an alpha texture and may discard afterwards.
//!
//! Inkless glyphs (space) consume no atlas area but keep their advance.
//! A glyph that cannot be placed fails the whole build; a partial
//! atlas never escapes.

use crate::font::{FontFace, RasterGlyph};
use crate::pack::{ShelfPacker, SkylinePacker};
use crate::TextError;

/// Packing strategy for atlas builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PackStrategy {
    /// Row-based shelves, the simple baked arrangement.
    Shelf,
    /// Bottom-left skyline best-fit, denser for mixed glyph sizes.
    #[default]
    Skyline,
}

/// Atlas build parameters.
#[derive(Clone, Debug)]
pub struct AtlasConfig {
    /// Atlas bitmap width in pixels.
    pub width: u32,
    /// Atlas bitmap height in pixels.
    pub height: u32,
    /// Glyph size in pixels.
    pub size_px: f32,
    /// First character of the contiguous range.
    pub first_char: char,
    /// Number of characters in the range.
    pub char_count: u32,
    /// Horizontal oversampling factor (values below 1 behave as 1).
    pub oversample_x: u32,
    /// Vertical oversampling factor (values below 1 behave as 1).
    pub oversample_y: u32,
    /// Padding between packed glyphs in pixels.
    pub padding: u32,
    /// Placement strategy.
    pub packing: PackStrategy,
    /// Longest text `layout_text` accepts against this atlas.
    pub max_text_length: usize,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            size_px: 32.0,
            first_char: ' ',
            char_count: 95, // printable ASCII
            oversample_x: 1,
            oversample_y: 1,
            padding: 1,
            packing: PackStrategy::default(),
            max_text_length: 256,
        }
    }
}

/// Metrics for one packed glyph.
///
/// The rectangle is the oversampled footprint in atlas pixels (zero
/// area for inkless glyphs); `xoff`, `yoff` and `advance` are
/// display-scale regardless of oversampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
    /// Display-space offset from the pen to the glyph's left edge.
    pub xoff: f32,
    /// Display-space offset from the baseline to the glyph's top,
    /// y-down (negative above the baseline).
    pub yoff: f32,
    /// Display-space horizontal advance.
    pub advance: f32,
}

impl GlyphMetrics {
    /// Rect width in atlas pixels.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Rect height in atlas pixels.
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }
}

/// A region within the atlas bitmap (UV coordinates normalized to [0,1]).
#[derive(Clone, Copy, Debug)]
pub struct AtlasRegion {
    /// Top-left U coordinate.
    pub u_min: f32,
    /// Top-left V coordinate.
    pub v_min: f32,
    /// Bottom-right U coordinate.
    pub u_max: f32,
    /// Bottom-right V coordinate.
    pub v_max: f32,
}

/// CPU-side glyph atlas over a contiguous character range.
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Coverage, one byte per pixel, rows top-down.
    pub pixels: Vec<u8>,
    /// Glyph size the atlas was rasterized for.
    pub size_px: f32,
    /// First character of the range.
    pub first_char: char,
    /// Horizontal oversampling factor the rects carry.
    pub oversample_x: u32,
    /// Vertical oversampling factor the rects carry.
    pub oversample_y: u32,
    /// Longest text `layout_text` accepts.
    pub max_text_length: usize,
    /// Per-character metrics, indexed by offset from `first_char`.
    /// Never empty for a built atlas; `glyph_or_fallback` indexes the
    /// first entry.
    pub glyphs: Vec<GlyphMetrics>,
}

impl GlyphAtlas {
    /// Rasterize and pack the configured character range.
    pub fn build(font: &FontFace, config: &AtlasConfig) -> Result<Self, TextError> {
        if config.char_count == 0 {
            return Err(TextError::EmptyCharRange);
        }
        let ox = config.oversample_x.max(1);
        let oy = config.oversample_y.max(1);

        log::debug!(
            "atlas build: {} chars from {:?}, {}px, {}x{}, oversample {}x{}",
            config.char_count,
            config.first_char,
            config.size_px,
            config.width,
            config.height,
            ox,
            oy
        );

        let mut pixels = vec![0u8; config.width as usize * config.height as usize];
        let mut glyphs = Vec::with_capacity(config.char_count as usize);
        let mut packer = Packer::new(config);

        let first = config.first_char as u32;
        let end = first.saturating_add(config.char_count);
        for code in first..end {
            let c = char::from_u32(code).ok_or(TextError::InvalidCharRange { code })?;
            let glyph = font.rasterize(c, config.size_px, ox, oy);

            let metrics = if glyph.width == 0 || glyph.height == 0 {
                // Inkless: keep the advance, no atlas area.
                GlyphMetrics {
                    x0: 0,
                    y0: 0,
                    x1: 0,
                    y1: 0,
                    xoff: glyph.xoff,
                    yoff: glyph.yoff,
                    advance: glyph.advance,
                }
            } else {
                let (w, h) = (glyph.width as u32, glyph.height as u32);
                let (x, y) = packer.place(w, h).ok_or(TextError::AtlasOverflow {
                    character: c,
                    width: w,
                    height: h,
                })?;
                stamp(&mut pixels, config.width, x, y, &glyph);
                GlyphMetrics {
                    x0: x,
                    y0: y,
                    x1: x + w,
                    y1: y + h,
                    xoff: glyph.xoff,
                    yoff: glyph.yoff,
                    advance: glyph.advance,
                }
            };
            glyphs.push(metrics);
        }

        let used: u64 = glyphs
            .iter()
            .map(|g| g.width() as u64 * g.height() as u64)
            .sum();
        let total = (config.width as u64 * config.height as u64).max(1);
        log::info!(
            "atlas built: {} glyphs in {}x{}, {}% filled",
            glyphs.len(),
            config.width,
            config.height,
            100 * used / total
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            pixels,
            size_px: config.size_px,
            first_char: config.first_char,
            oversample_x: ox,
            oversample_y: oy,
            max_text_length: config.max_text_length,
            glyphs,
        })
    }

    /// Number of characters in the atlas range.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Metrics for `c`, or `None` when it is outside the range.
    pub fn glyph(&self, c: char) -> Option<&GlyphMetrics> {
        let idx = (c as usize).checked_sub(self.first_char as usize)?;
        self.glyphs.get(idx)
    }

    /// Metrics for `c`, or the range's first entry when `c` is outside
    /// it.
    ///
    /// Panics if the glyph table is empty (builds never produce one).
    pub fn glyph_or_fallback(&self, c: char) -> &GlyphMetrics {
        self.glyph(c).unwrap_or(&self.glyphs[0])
    }

    /// Convert a glyph rect to a normalized UV region.
    pub fn region(&self, metrics: &GlyphMetrics) -> AtlasRegion {
        let inv_w = 1.0 / self.width as f32;
        let inv_h = 1.0 / self.height as f32;
        AtlasRegion {
            u_min: metrics.x0 as f32 * inv_w,
            v_min: metrics.y0 as f32 * inv_h,
            u_max: metrics.x1 as f32 * inv_w,
            v_max: metrics.y1 as f32 * inv_h,
        }
    }
}

// ---------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------

enum Packer {
    Shelf(ShelfPacker),
    Skyline(SkylinePacker),
}

impl Packer {
    fn new(config: &AtlasConfig) -> Self {
        match config.packing {
            PackStrategy::Shelf => {
                Packer::Shelf(ShelfPacker::new(config.width, config.height, config.padding))
            }
            PackStrategy::Skyline => Packer::Skyline(SkylinePacker::new(
                config.width,
                config.height,
                config.padding,
            )),
        }
    }

    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        match self {
            Packer::Shelf(p) => p.place(w, h),
            Packer::Skyline(p) => p.place(w, h),
        }
    }
}

/// Copy a glyph bitmap into the atlas at `(x, y)`. The packer already
/// guaranteed the rect is in bounds.
fn stamp(pixels: &mut [u8], atlas_w: u32, x: u32, y: u32, glyph: &RasterGlyph) {
    let atlas_w = atlas_w as usize;
    let (x, y) = (x as usize, y as usize);
    for row in 0..glyph.height {
        let src = &glyph.coverage[row * glyph.width..(row + 1) * glyph.width];
        let dst = (y + row) * atlas_w + x;
        pixels[dst..dst + glyph.width].copy_from_slice(src);
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_atlas() -> GlyphAtlas {
        GlyphAtlas {
            width: 64,
            height: 32,
            pixels: vec![0; 64 * 32],
            size_px: 16.0,
            first_char: 'A',
            oversample_x: 1,
            oversample_y: 1,
            max_text_length: 8,
            glyphs: vec![
                GlyphMetrics {
                    x0: 0,
                    y0: 0,
                    x1: 8,
                    y1: 16,
                    xoff: 1.0,
                    yoff: -16.0,
                    advance: 9.0,
                },
                GlyphMetrics {
                    x0: 16,
                    y0: 0,
                    x1: 16,
                    y1: 0,
                    xoff: 0.0,
                    yoff: 0.0,
                    advance: 4.0,
                },
            ],
        }
    }

    #[test]
    fn test_default_config() {
        let config = AtlasConfig::default();
        assert_eq!(config.width, 512);
        assert_eq!(config.height, 512);
        assert_eq!(config.first_char, ' ');
        assert_eq!(config.char_count, 95);
        assert_eq!(config.packing, PackStrategy::Skyline);
    }

    #[test]
    fn test_metrics_dimensions() {
        let atlas = synthetic_atlas();
        assert_eq!(atlas.glyphs[0].width(), 8);
        assert_eq!(atlas.glyphs[0].height(), 16);
        assert!(!atlas.glyphs[0].is_empty());
        assert!(atlas.glyphs[1].is_empty());
    }

    #[test]
    fn test_glyph_lookup() {
        let atlas = synthetic_atlas();
        assert!(atlas.glyph('A').is_some());
        assert!(atlas.glyph('B').is_some());
        assert!(atlas.glyph('C').is_none());
        assert!(atlas.glyph(' ').is_none());
    }

    #[test]
    fn test_fallback_resolves_to_first_entry() {
        let atlas = synthetic_atlas();
        let fallback = atlas.glyph_or_fallback('z');
        assert_eq!(fallback.advance, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_fallback_on_empty_table() {
        let mut atlas = synthetic_atlas();
        atlas.glyphs.clear();
        let _ = atlas.glyph_or_fallback('A');
    }

    #[test]
    fn test_region_normalization() {
        let atlas = synthetic_atlas();
        let region = atlas.region(&atlas.glyphs[0]);
        assert_eq!(region.u_min, 0.0);
        assert_eq!(region.v_min, 0.0);
        assert_eq!(region.u_max, 8.0 / 64.0);
        assert_eq!(region.v_max, 16.0 / 32.0);
    }

    #[test]
    fn test_stamp_copies_rows() {
        let mut pixels = vec![0u8; 8 * 8];
        let glyph = RasterGlyph {
            width: 2,
            height: 2,
            coverage: vec![10, 20, 30, 40],
            xoff: 0.0,
            yoff: 0.0,
            advance: 0.0,
        };
        stamp(&mut pixels, 8, 3, 1, &glyph);
        let at = |row: usize, col: usize| row * 8 + col;
        assert_eq!(pixels[at(1, 3)], 10);
        assert_eq!(pixels[at(1, 4)], 20);
        assert_eq!(pixels[at(2, 3)], 30);
        assert_eq!(pixels[at(2, 4)], 40);
        // Neighbors untouched.
        assert_eq!(pixels[at(1, 2)], 0);
        assert_eq!(pixels[at(1, 5)], 0);
    }
}
