//! Block luminance sampling.
//!
//! Brightness of a block is the mean ITU-R BT.601 luma of its pixels:
//! `L = 0.299*R + 0.587*G + 0.114*B`, computed on the alpha-premultiplied
//! 16-bit channel values of the decoded grid and scaled back down to 8 bits.
//! Transparent pixels therefore count as black.

use super::PixelGrid;

/// Divisor bringing a 16-bit luma sum back to the 8-bit range.
pub const CHANNEL_SCALE: f64 = 256.0;

/// Number of block rows and columns needed to cover a `width` x `height`
/// grid: `(ceil(height / chunk), ceil(width / chunk))`.
pub fn block_count(width: u32, height: u32, chunk_size: u32) -> (u32, u32) {
    (height.div_ceil(chunk_size), width.div_ceil(chunk_size))
}

/// Mean brightness of the block at (`row_chunk`, `col_chunk`).
///
/// Blocks on the bottom and right edges may hang off the grid; only the
/// in-bounds pixels are averaged. A block entirely outside the grid
/// samples as 0.
pub fn sample_block(grid: &PixelGrid, row_chunk: u32, col_chunk: u32, chunk_size: u32) -> u8 {
    let (width, height) = grid.dimensions();
    let top = row_chunk * chunk_size;
    let left = col_chunk * chunk_size;

    let mut total = 0.0f64;
    let mut count = 0u32;

    for y in top..top + chunk_size {
        if y >= height {
            break;
        }
        for x in left..left + chunk_size {
            if x >= width {
                break;
            }
            let [r, g, b, a] = grid.get_pixel(x, y).0;
            let (r, g, b) = (premultiply(r, a), premultiply(g, a), premultiply(b, a));
            total += f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114;
            count += 1;
        }
    }

    if count == 0 {
        return 0;
    }

    (total / CHANNEL_SCALE / f64::from(count)) as u8
}

/// Scale a straight 16-bit channel by its alpha.
fn premultiply(channel: u16, alpha: u16) -> u32 {
    u32::from(channel) * u32::from(alpha) / u32::from(u16::MAX)
}
