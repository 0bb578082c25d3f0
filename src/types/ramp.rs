//! Glyph ramps: ordered characters from lightest to densest ink.

use std::fmt;

use crate::error::{AsciiError, Result};

/// The built-in ramp, lightest first.
pub const DEFAULT_RAMP: [char; 8] = ['.', ':', 'c', 'o', 'P', 'O', '@', '$'];

/// An ordered set of distinct glyphs, index 0 lightest.
///
/// Brightness values map linearly onto the ramp, so a bright block gets a
/// dense glyph and draws more foreground ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Create a ramp from glyphs ordered lightest to densest.
    ///
    /// Fails if the ramp is empty or repeats a glyph.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();

        if glyphs.is_empty() {
            return Err(AsciiError::argument("glyph ramp is empty", None));
        }

        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return Err(AsciiError::argument(
                    format!("glyph ramp repeats '{}'", glyph),
                    Some("Each ramp glyph must be distinct"),
                ));
            }
        }

        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Ramp index for a brightness value: `floor(brightness / 256 * N)`,
    /// clamped to the last glyph.
    pub fn index_for(&self, brightness: u8) -> usize {
        let n = self.glyphs.len();
        (usize::from(brightness) * n / 256).min(n - 1)
    }

    /// Glyph for a brightness value.
    pub fn select(&self, brightness: u8) -> char {
        self.glyphs[self.index_for(brightness)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.to_vec(),
        }
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ramp() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.len(), 8);
        assert_eq!(ramp.to_string(), ".:coPO@$");
    }

    #[test]
    fn test_select_extremes() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.select(0), '.');
        assert_eq!(ramp.select(31), '.');
        assert_eq!(ramp.select(32), ':');
        assert_eq!(ramp.select(224), '$');
        assert_eq!(ramp.select(255), '$');
    }

    #[test]
    fn test_select_clamps_at_full_brightness() {
        // A single-glyph ramp would otherwise index past the end
        let ramp = GlyphRamp::new(['#']).unwrap();
        assert_eq!(ramp.index_for(255), 0);

        let nine = GlyphRamp::new(" .:-=+*#%".chars()).unwrap();
        assert_eq!(nine.index_for(255), 8);
    }

    #[test]
    fn test_select_is_monotonic() {
        for ramp in [
            GlyphRamp::default(),
            GlyphRamp::new(" .:-=+*#%".chars()).unwrap(),
            GlyphRamp::new(['a', 'b', 'c']).unwrap(),
        ] {
            let mut last = 0;
            for b in 0..=255u8 {
                let index = ramp.index_for(b);
                assert!(index >= last, "ramp {} not monotonic at {}", ramp, b);
                assert!(index < ramp.len());
                last = index;
            }
            assert_eq!(last, ramp.len() - 1);
        }
    }

    #[test]
    fn test_every_glyph_reachable() {
        let ramp = GlyphRamp::default();
        let mut seen: Vec<char> = (0..=255u8).map(|b| ramp.select(b)).collect();
        seen.dedup();
        assert_eq!(seen, DEFAULT_RAMP.to_vec());
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(GlyphRamp::new(std::iter::empty::<char>()).is_err());
        assert!(GlyphRamp::new("ab.a".chars()).is_err());
    }
}
