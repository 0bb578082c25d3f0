//! Rendering module for asciify.
//!
//! This module turns decoded pixel grids into ASCII-art canvases: block
//! sampling, glyph selection, glyph drawing, and the image codec glue.

use image::{ImageBuffer, Rgba};

pub mod ascii;
pub mod codec;
pub mod font;
pub mod sampler;

/// Decoded input image. Channels are 16-bit so the sampler sees the full
/// precision of 16-bit PNGs; 8-bit inputs are widened by the decoder.
pub type PixelGrid = ImageBuffer<Rgba<u16>, Vec<u16>>;

pub use ascii::{AsciiRenderer, GlyphMatrix, RenderOptions, DEFAULT_CHUNK_SIZE};
pub use codec::{decode_bytes, decode_file, encode_file};
pub use font::{BitmapFont, GlyphRasterizer};
pub use sampler::{block_count, sample_block};
