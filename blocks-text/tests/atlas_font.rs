//! Font-backed atlas and layout tests.
//!
//! These exercise the full rasterize, pack, layout pipeline against a
//! real TrueType font found on the host. On machines without any
//! usable system font each test prints a notice and returns early
//! instead of failing the suite.

use std::fs;
use std::path::{Path, PathBuf};

use blocks_text::{
    layout_text, AtlasConfig, FontFace, GlyphAtlas, GlyphMetrics, PackStrategy, TextError,
};

const FONT_ROOTS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

const MAX_CANDIDATES: usize = 50;

fn collect_ttf(dir: &Path, depth: u32, out: &mut Vec<PathBuf>) {
    if depth > 4 || out.len() >= MAX_CANDIDATES {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        if out.len() >= MAX_CANDIDATES {
            return;
        }
        let path = entry.path();
        if path.is_dir() {
            collect_ttf(&path, depth + 1, out);
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"))
        {
            out.push(path);
        }
    }
}

/// First system font fontdue can parse, if any.
fn load_test_font() -> Option<FontFace> {
    let mut candidates = Vec::new();
    for root in FONT_ROOTS {
        collect_ttf(Path::new(root), 0, &mut candidates);
    }
    for path in candidates {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        if let Ok(font) = FontFace::from_bytes(&bytes) {
            return Some(font);
        }
    }
    None
}

/// Packed boxes must stay disjoint even with their padding applied.
fn padded_disjoint(a: &GlyphMetrics, b: &GlyphMetrics, pad: u32) -> bool {
    a.x1 + pad <= b.x0 || b.x1 + pad <= a.x0 || a.y1 + pad <= b.y0 || b.y1 + pad <= a.y0
}

fn assert_well_packed(atlas: &GlyphAtlas, pad: u32) {
    assert_eq!(
        atlas.pixels.len(),
        atlas.width as usize * atlas.height as usize
    );
    let inked: Vec<&GlyphMetrics> = atlas.glyphs.iter().filter(|g| !g.is_empty()).collect();
    assert!(!inked.is_empty(), "ASCII range should have inked glyphs");
    for g in &inked {
        assert!(g.x1 <= atlas.width, "rect exceeds atlas width");
        assert!(g.y1 <= atlas.height, "rect exceeds atlas height");
    }
    for (i, a) in inked.iter().enumerate() {
        for b in &inked[i + 1..] {
            assert!(
                padded_disjoint(a, b, pad),
                "overlapping rects ({},{})-({},{}) and ({},{})-({},{})",
                a.x0,
                a.y0,
                a.x1,
                a.y1,
                b.x0,
                b.y0,
                b.x1,
                b.y1
            );
        }
    }
}

#[test]
fn test_build_ascii_skyline() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let config = AtlasConfig::default();
    let atlas = GlyphAtlas::build(&font, &config).unwrap();
    assert_eq!(atlas.glyph_count(), 95);
    assert_well_packed(&atlas, config.padding);
}

#[test]
fn test_build_ascii_shelf() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let config = AtlasConfig {
        packing: PackStrategy::Shelf,
        ..AtlasConfig::default()
    };
    let atlas = GlyphAtlas::build(&font, &config).unwrap();
    assert_eq!(atlas.glyph_count(), 95);
    assert_well_packed(&atlas, config.padding);
}

#[test]
fn test_space_only_range() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let config = AtlasConfig {
        first_char: ' ',
        char_count: 1,
        ..AtlasConfig::default()
    };
    let atlas = GlyphAtlas::build(&font, &config).unwrap();
    assert_eq!(atlas.glyph_count(), 1);
    let space = atlas.glyph(' ').unwrap();
    assert!(space.is_empty(), "space should occupy no atlas area");
    assert!(space.advance > 0.0, "space still advances the pen");
}

#[test]
fn test_overflow_names_the_glyph() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    // 64 px glyphs cannot fit a 32x32 atlas.
    let config = AtlasConfig {
        width: 32,
        height: 32,
        size_px: 64.0,
        ..AtlasConfig::default()
    };
    let err = GlyphAtlas::build(&font, &config).unwrap_err();
    assert!(
        matches!(err, TextError::AtlasOverflow { .. }),
        "expected overflow, got {err:?}"
    );
}

#[test]
fn test_oversampling_keeps_display_metrics() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let plain = GlyphAtlas::build(&font, &AtlasConfig::default()).unwrap();
    let config = AtlasConfig {
        width: 1024,
        height: 1024,
        oversample_x: 2,
        oversample_y: 2,
        ..AtlasConfig::default()
    };
    let sharp = GlyphAtlas::build(&font, &config).unwrap();

    for c in 'A'..='Z' {
        let a = plain.glyph(c).unwrap();
        let b = sharp.glyph(c).unwrap();
        // Advance comes from display-scale metrics, identical by
        // construction.
        assert_eq!(a.advance, b.advance, "advance drifted for {c:?}");
    }

    // On-screen quad sizes agree within a pixel of rounding slack.
    let one = layout_text(&plain, "A", 0.0, 0.0).unwrap();
    let two = layout_text(&sharp, "A", 0.0, 0.0).unwrap();
    let (qa, qb) = (&one.quads[0], &two.quads[0]);
    assert!(
        ((qa.x1 - qa.x0) - (qb.x1 - qb.x0)).abs() <= 2.0,
        "oversampled glyph width diverged"
    );
    assert!(
        ((qa.y0 - qa.y1) - (qb.y0 - qb.y1)).abs() <= 2.0,
        "oversampled glyph height diverged"
    );
}

#[test]
fn test_layout_sentence() {
    let Some(font) = load_test_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let atlas = GlyphAtlas::build(&font, &AtlasConfig::default()).unwrap();
    let layout = layout_text(&atlas, "Hello, world!", 0.0, 0.0).unwrap();
    assert_eq!(layout.quads.len(), 13);
    assert!(layout.width > 0.0);

    for q in &layout.quads {
        assert!(q.x1 >= q.x0);
        // Positions are y-up while UVs stay y-down.
        if q.character != ' ' {
            assert!(q.y0 > q.y1, "{:?} should have height", q.character);
            assert!(q.t1 > q.t0);
        }
        for uv in [q.s0, q.t0, q.s1, q.t1] {
            assert!((0.0..=1.0).contains(&uv), "UV out of range: {uv}");
        }
    }

    // The pen only moves right across a left-to-right string.
    for pair in layout.quads.windows(2) {
        assert!(pair[1].x0 >= pair[0].x0 - 1.0);
    }
}
