//! Asset store tests over a real temporary directory.
//!
//! Each test builds a fresh directory, drops files into it and loads
//! them back through the store, including the failure-isolation
//! guarantee that a bad asset leaves the store usable.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use blocks_assets::{AssetError, AssetStore};
use blocks_model::{ModelError, VertexLayout};
use blocks_text::FontFace;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

const CUBE_SMODEL: &str = "\
? 2.0 cube 2 1
% 1
> cube 2 0 16 -1 -1 -1 1 1 1
0 0 0 0 0 1 0 0
1 0 0 0 0 1 1 0
";

fn store_with(files: &[(&str, &[u8])]) -> (TempDir, AssetStore) {
    let dir = TempDir::new().unwrap();
    for (name, bytes) in files {
        fs::write(dir.path().join(name), bytes).unwrap();
    }
    let store = AssetStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_load_mesh() {
    let (_dir, store) = store_with(&[("cube.smodel", CUBE_SMODEL.as_bytes())]);
    let mesh = store.load_mesh("cube.smodel").unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    assert_eq!(mesh.layout(), VertexLayout::FULL);
    assert_eq!(mesh.vertex(1).position(), [1.0, 0.0, 0.0]);
}

#[test]
fn test_load_mesh_bad_version() {
    let (_dir, store) = store_with(&[("bad.smodel", b"? 3.5 thing 1 1".as_slice())]);
    let err = store.load_mesh("bad.smodel").unwrap_err();
    assert!(matches!(
        err,
        AssetError::Model(ModelError::UnsupportedVersion(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let (_dir, store) = store_with(&[]);
    let err = store.load_mesh("nope.smodel").unwrap_err();
    assert!(matches!(err, AssetError::Io(_)));
}

#[test]
fn test_load_texture_png() {
    let mut img = RgbImage::new(2, 3);
    img.put_pixel(0, 0, Rgb([9, 8, 7]));
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let (_dir, store) = store_with(&[("tex.png", png.as_slice())]);
    let pixmap = store.load_texture("tex.png").unwrap();
    assert_eq!((pixmap.width, pixmap.height), (2, 3));
    assert_eq!(pixmap.channels, 3);
    assert_eq!(&pixmap.pixels[0..3], &[9, 8, 7]);
}

#[test]
fn test_bad_asset_leaves_store_usable() {
    let (_dir, store) = store_with(&[
        ("good.smodel", CUBE_SMODEL.as_bytes()),
        ("bad.smodel", b"1.0 2.0 3.0".as_slice()),
    ]);
    // Stray data before any header fails that load alone.
    let err = store.load_mesh("bad.smodel").unwrap_err();
    assert!(matches!(err, AssetError::Model(ModelError::MissingHeader)));
    let mesh = store.load_mesh("good.smodel").unwrap();
    assert_eq!(mesh.vertex_count(), 2);
}

#[test]
fn test_load_font() {
    let Some(path) = find_system_ttf() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let bytes = fs::read(&path).unwrap();
    let (_dir, store) = store_with(&[("font.ttf", bytes.as_slice())]);
    let font = store.load_font("font.ttf").unwrap();
    assert!(font.has_glyph('A') || font.has_glyph('0'));
}

/// First system font fontdue can parse, if any.
fn find_system_ttf() -> Option<PathBuf> {
    let roots = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ];
    let mut candidates = Vec::new();
    for root in roots {
        collect_ttf(Path::new(root), 0, &mut candidates);
    }
    candidates.into_iter().find(|path| {
        fs::read(path)
            .ok()
            .and_then(|bytes| FontFace::from_bytes(&bytes).ok())
            .is_some()
    })
}

fn collect_ttf(dir: &Path, depth: u32, out: &mut Vec<PathBuf>) {
    if depth > 4 || out.len() >= 50 {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        if out.len() >= 50 {
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
