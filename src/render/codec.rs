//! Image decoding and encoding.
//!
//! Decoding sniffs the container format from the file header; encoding picks
//! the format from the output extension.

use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::discovery::OutputFormat;
use crate::error::{AsciiError, Result};

use super::PixelGrid;

/// Decode an image file into a 16-bit RGBA grid.
pub fn decode_file(path: &Path) -> Result<PixelGrid> {
    let decode_error = |message: String| AsciiError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_error(format!("Failed to read image: {}", e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(format!("Failed to read image: {}", e)))?;

    let img = reader.decode().map_err(|e| decode_error(e.to_string()))?;

    Ok(img.to_rgba16())
}

/// Decode in-memory image bytes into a 16-bit RGBA grid.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba16())
        .map_err(|e| AsciiError::Decode {
            path: "<memory>".into(),
            message: e.to_string(),
        })
}

/// Encode a canvas to `path`, choosing the format from its extension.
///
/// JPEG has no alpha channel, so the canvas is flattened to RGB first.
pub fn encode_file(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path).ok_or_else(|| AsciiError::Encode {
        path: path.to_path_buf(),
        message: "unsupported output format".to_string(),
    })?;

    let result = match format {
        OutputFormat::Png => canvas.save_with_format(path, ImageFormat::Png),
        OutputFormat::Jpeg => DynamicImage::ImageRgba8(canvas.clone())
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg),
    };

    result.map_err(|e| AsciiError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
