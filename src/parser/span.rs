//! Byte spans into a parsed input string.

use miette::SourceSpan;

/// A byte range in an input string (start offset plus length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first byte
    pub offset: usize,
    /// Length in bytes (may be zero to point between characters)
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Span covering the whole of `source`.
    pub fn whole(source: &str) -> Self {
        Self::new(0, source.len())
    }

    /// Zero-length span pointing at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Span of the whitespace-trimmed content of `segment`, where
    /// `segment` itself starts at byte `base`.
    pub fn of_trimmed(base: usize, segment: &str) -> Self {
        let lead = segment.len() - segment.trim_start().len();
        Self::new(base + lead, segment.trim().len())
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.offset.into(), span.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_point() {
        assert_eq!(Span::whole("#12345"), Span::new(0, 6));
        assert!(Span::point(3).is_empty());
        assert_eq!(Span::new(2, 3).end(), 5);
    }

    #[test]
    fn test_of_trimmed() {
        // segment " 246 " starting at byte 7
        assert_eq!(Span::of_trimmed(7, " 246 "), Span::new(8, 3));
        assert_eq!(Span::of_trimmed(4, "   "), Span::new(7, 0));
    }

    #[test]
    fn test_into_source_span() {
        let span: SourceSpan = Span::new(4, 2).into();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 2);
    }
}
