//! Parsers for user-supplied values.
//!
//! Currently this is the colour parser used for the `--fg` / `--bg` flags and
//! the `fg` / `bg` settings keys. Failures carry a byte [`Span`] into the
//! original string so diagnostics can point at the exact offending text.
//!
//! ```ignore
//! use asciify::parser::parse_colour;
//!
//! let ink = parse_colour("rgb(15, 246, 233)")?;
//! ```

pub mod colour;
pub mod span;

pub use colour::{parse_colour, ColourParseError};
pub use span::Span;
