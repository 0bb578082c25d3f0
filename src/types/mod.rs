//! Core domain types for asciify.
//!
//! - `Colour` - RGBA colour values for ink and canvas
//! - `GlyphRamp` - ordered glyphs used to stand in for brightness

mod colour;
mod ramp;

pub use colour::Colour;
pub use ramp::{GlyphRamp, DEFAULT_RAMP};
