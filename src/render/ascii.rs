//! ASCII rasterizer.
//!
//! Covers the input grid with square blocks, picks one glyph per block from
//! the ramp and draws the glyphs in the foreground colour onto a canvas
//! filled with the background colour.

use std::fmt;
use std::path::Path;

use image::RgbaImage;

use crate::error::{AsciiError, Result};
use crate::types::{Colour, GlyphRamp};

use super::codec::{decode_file, encode_file};
use super::font::{BitmapFont, GlyphRasterizer};
use super::sampler::{block_count, sample_block};
use super::PixelGrid;

/// Default block edge length in pixels.
pub const DEFAULT_CHUNK_SIZE: u32 = 10;

/// Settings for one rendering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyph ink colour.
    pub fg: Colour,
    /// Canvas fill colour.
    pub bg: Colour,
    /// Block edge length in pixels (at least 1).
    pub chunk_size: u32,
    /// Glyphs ordered lightest to densest.
    pub ramp: GlyphRamp,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fg: Colour::DEFAULT_FOREGROUND,
            bg: Colour::DEFAULT_BACKGROUND,
            chunk_size: DEFAULT_CHUNK_SIZE,
            ramp: GlyphRamp::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_colours(mut self, fg: Colour, bg: Colour) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }
}

/// One glyph per block, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMatrix {
    rows: Vec<Vec<char>>,
}

impl GlyphMatrix {
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of block rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of block columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }
}

impl fmt::Display for GlyphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for glyph in row {
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}

/// Renders pixel grids as ASCII art.
pub struct AsciiRenderer<F = BitmapFont> {
    options: RenderOptions,
    font: F,
}

impl AsciiRenderer<BitmapFont> {
    /// Renderer using the embedded bitmap font.
    pub fn new(options: RenderOptions) -> Result<Self> {
        Self::with_font(options, BitmapFont::new())
    }
}

impl<F: GlyphRasterizer> AsciiRenderer<F> {
    /// Renderer drawing through a custom glyph rasterizer.
    pub fn with_font(options: RenderOptions, font: F) -> Result<Self> {
        if options.chunk_size == 0 {
            return Err(AsciiError::argument(
                "chunk size must be at least 1",
                Some("Set chunk_size to a positive number of pixels"),
            ));
        }

        Ok(Self { options, font })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Select a glyph for every block of the grid.
    pub fn glyphs(&self, grid: &PixelGrid) -> GlyphMatrix {
        let chunk = self.options.chunk_size;
        let (row_chunks, col_chunks) = block_count(grid.width(), grid.height(), chunk);

        let rows = (0..row_chunks)
            .map(|row| {
                (0..col_chunks)
                    .map(|col| self.options.ramp.select(sample_block(grid, row, col, chunk)))
                    .collect()
            })
            .collect();

        GlyphMatrix { rows }
    }

    /// Render the grid onto a new canvas of the same size.
    pub fn render(&self, grid: &PixelGrid) -> RgbaImage {
        let matrix = self.glyphs(grid);
        self.draw(&matrix, grid.width(), grid.height())
    }

    /// Decode `input`, render it and encode the canvas to `output`.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let grid = decode_file(input)?;
        let canvas = self.render(&grid);
        encode_file(&canvas, output)
    }

    /// Draw a glyph matrix onto a `width` x `height` canvas.
    pub fn draw(&self, matrix: &GlyphMatrix, width: u32, height: u32) -> RgbaImage {
        let chunk = self.options.chunk_size;
        let ascent = self.font.ascent();
        let mut canvas = RgbaImage::from_pixel(width, height, self.options.bg.into());

        for (row, glyphs) in matrix.rows().iter().enumerate() {
            for (col, &glyph) in glyphs.iter().enumerate() {
                let origin = (col as u32 * chunk, row as u32 * chunk + ascent);
                self.font.draw_glyph(&mut canvas, glyph, origin, self.options.fg);
            }
        }

        canvas
    }
}
