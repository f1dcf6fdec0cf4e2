//! Resource types for embedded images.

use crate::error::{Error, Result};
use image::GenericImageView;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An image resource embedded in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Raw binary data
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,

    /// MIME type (e.g., "image/png")
    pub mime_type: String,

    /// Original filename if known
    pub filename: Option<String>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Resource {
    /// Create an image resource from encoded bytes.
    ///
    /// The data is decoded once to validate it and read its dimensions.
    pub fn image(data: Vec<u8>) -> Result<Self> {
        let mime_type = Self::detect_mime_type(&data)
            .ok_or_else(|| Error::Image("unrecognized image data".into()))?;
        let (width, height) = image::load_from_memory(&data)?.dimensions();
        Ok(Self {
            data,
            mime_type: mime_type.to_string(),
            filename: None,
            width,
            height,
        })
    }

    /// Load an image resource from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::StampNotFound(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        let mut resource = Self::image(data)?;
        resource.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(resource)
    }

    /// Height for the given display width, keeping the aspect ratio.
    pub fn scaled_height(&self, width: f32) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        width * self.height as f32 / self.width as f32
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        // BMP: BM
        if data.starts_with(b"BM") {
            return Some("image/bmp");
        }

        None
    }
}
