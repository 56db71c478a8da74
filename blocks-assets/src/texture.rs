//! Texture decoding to raw pixels.
//!
//! The uploader (not part of this workspace) picks the GL format from
//! the channel count: 1 maps to LUMINANCE or ALPHA, 3 to RGB, 4 to
//! RGBA. Keeping the native channel count avoids padding grayscale
//! and RGB images out to four bytes per pixel.

use image::DynamicImage;

use crate::AssetError;

/// A decoded image ready for texture upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    /// 1 (grayscale), 3 (RGB) or 4 (RGBA).
    pub channels: u8,
    /// `width * height * channels` bytes, rows top-down.
    pub pixels: Vec<u8>,
}

impl Pixmap {
    /// Decode PNG or JPEG bytes.
    ///
    /// Grayscale, RGB and RGBA keep their native channel count; every
    /// other source format is expanded to RGBA.
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)?;
        let (width, height) = (decoded.width(), decoded.height());
        let (channels, pixels) = match decoded {
            DynamicImage::ImageLuma8(img) => (1, img.into_raw()),
            DynamicImage::ImageRgb8(img) => (3, img.into_raw()),
            DynamicImage::ImageRgba8(img) => (4, img.into_raw()),
            other => (4, other.to_rgba8().into_raw()),
        };
        log::debug!("decoded {width}x{height} image, {channels} channels");
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }
}

// ===================================================================
// Tests
// ===================================================================
