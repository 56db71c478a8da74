//! # blocks-assets
//!
//! Filesystem glue over the format crates: read a file from a root
//! directory, hand the bytes to the right decoder, return the typed
//! result. Loads are independent of each other; one bad asset fails
//! its own call without disturbing anything loaded before or after.

pub mod store;
pub mod texture;

pub use store::AssetStore;
pub use texture::Pixmap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("mesh parse failed: {0}")]
    Model(#[from] blocks_model::ModelError),
    #[error("font or atlas failed: {0}")]
    Text(#[from] blocks_text::TextError),
}
