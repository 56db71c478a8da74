//! Root-anchored asset loading.

use std::fs;
use std::path::{Path, PathBuf};
use blocks_model::{parse_smodel, MeshBuffer};
use blocks_text::FontFace;

use crate::texture::Pixmap;
use crate::AssetError;

/// Loads assets from a directory root.
///
/// Every `load_*` call stands alone: a failure is returned to the
/// caller with nothing half-registered, so one bad file never poisons
/// assets loaded before or after it.
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Raw bytes of an asset file.
    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        Ok(fs::read(self.root.join(name))?)
    }

    /// An asset file as UTF-8 text.
    pub fn read_text(&self, name: &str) -> Result<String, AssetError> {
        Ok(fs::read_to_string(self.root.join(name))?)
    }

    /// Parse an smodel mesh file.
    pub fn load_mesh(&self, name: &str) -> Result<MeshBuffer, AssetError> {
        let text = self.read_text(name)?;
        let mesh = parse_smodel(&text)?;
        log::info!("loaded mesh '{}': {} vertices", name, mesh.vertex_count());
        Ok(mesh)
    }

    /// Parse a TrueType or OpenType font file.
    pub fn load_font(&self, name: &str) -> Result<FontFace, AssetError> {
        let bytes = self.read_bytes(name)?;
        let font = FontFace::from_bytes(&bytes)?;
        log::info!("loaded font '{name}'");
        Ok(font)
    }

    /// Decode a PNG or JPEG texture file.
    pub fn load_texture(&self, name: &str) -> Result<Pixmap, AssetError> {
        let bytes = self.read_bytes(name)?;
        let pixmap = Pixmap::decode(&bytes)?;
        log::info!(
            "loaded texture '{}': {}x{}, {} channels",
            name, pixmap.width, pixmap.height, pixmap.channels
        );
        Ok(pixmap)
    }
}
