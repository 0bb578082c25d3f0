//! asciify - render images as ASCII art
//!
//! Each image is cut into square blocks, every block is reduced to one
//! luminance value, and a glyph from a light-to-dense ramp is drawn for it
//! onto a canvas the size of the original. Whole directories are converted
//! concurrently by a fixed pool of workers.

pub mod batch;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use batch::{BatchPipeline, BatchReport, ConversionJob, JobOutcome, JobStatus};
pub use error::{AsciiError, Result};
pub use parser::{parse_colour, ColourParseError};
pub use render::{
    AsciiRenderer, BitmapFont, GlyphMatrix, GlyphRasterizer, PixelGrid, RenderOptions,
};
pub use types::{Colour, GlyphRamp};
