//! Colour string parser.
//!
//! Accepts `#RGB`, `#RRGGBB`, `rgb(r, g, b)` and `rgba(r, g, b, a)`. Every
//! failure carries the byte span of the offending part of the input so the
//! diagnostic can underline it.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::types::Colour;

use super::span::Span;

const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];

const FORMS_HELP: &str = "Use #RGB, #RRGGBB, rgb(r, g, b) or rgba(r, g, b, a)";

/// A colour string that could not be parsed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("invalid colour '{input}': {message}")]
#[diagnostic(code(asciify::colour))]
pub struct ColourParseError {
    #[source_code]
    input: String,
    #[label("{message}")]
    span: SourceSpan,
    message: String,
    #[help]
    help: Option<String>,
}

impl ColourParseError {
    fn new(input: &str, span: Span, message: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            span: span.into(),
            message: message.into(),
            help: None,
        }
    }

    fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the offending span.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }

    /// Byte length of the offending span.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The offending span.
    pub fn span(&self) -> Span {
        Span::new(self.offset(), self.len())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

type ParseResult<T> = std::result::Result<T, ColourParseError>;

/// Parse a colour string into a [`Colour`].
pub fn parse_colour(input: &str) -> ParseResult<Colour> {
    if input.is_empty() {
        return Err(ColourParseError::new(input, Span::point(0), "empty colour string")
            .with_help(FORMS_HELP));
    }

    if input.starts_with('#') {
        return parse_hex(input);
    }

    if let Some(name_len) = function_name_len(input) {
        return parse_function(input, name_len);
    }

    Err(
        ColourParseError::new(input, Span::whole(input), "unrecognised colour format")
            .with_help(FORMS_HELP),
    )
}

fn parse_hex(input: &str) -> ParseResult<Colour> {
    let len = input.len();
    if len != 4 && len != 7 {
        return Err(ColourParseError::new(
            input,
            Span::whole(input),
            format!("hex colour must have 3 or 6 digits, found {}", len - 1),
        )
        .with_help("Use #RGB or #RRGGBB"));
    }

    let mut nibbles = [0u8; 6];
    for (i, (offset, c)) in input.char_indices().skip(1).enumerate() {
        match c.to_digit(16) {
            Some(d) => nibbles[i] = d as u8,
            None => {
                return Err(ColourParseError::new(
                    input,
                    Span::new(offset, c.len_utf8()),
                    format!("'{}' is not a hex digit", c),
                ))
            }
        }
    }

    let colour = if len == 4 {
        Colour::rgb(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17)
    } else {
        Colour::rgb(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        )
    };

    Ok(colour)
}

/// Length of a leading `rgba` / `rgb` function name, case-insensitive.
fn function_name_len(input: &str) -> Option<usize> {
    ["rgba", "rgb"].iter().find_map(|name| {
        input
            .get(..name.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(name))
            .map(|_| name.len())
    })
}

fn parse_function(input: &str, name_len: usize) -> ParseResult<Colour> {
    if !input[name_len..].starts_with('(') {
        let span = match input[name_len..].chars().next() {
            Some(c) => Span::new(name_len, c.len_utf8()),
            None => Span::point(name_len),
        };
        return Err(ColourParseError::new(input, span, "expected '('").with_help(FORMS_HELP));
    }

    if !input.ends_with(')') {
        return Err(
            ColourParseError::new(input, Span::point(input.len()), "expected ')'")
                .with_help(FORMS_HELP),
        );
    }

    let content_start = name_len + 1;
    let content = &input[content_start..input.len() - 1];

    let mut segments = Vec::with_capacity(4);
    let mut offset = content_start;
    for segment in content.split(',') {
        segments.push((offset, segment));
        offset += segment.len() + 1;
    }

    if segments.len() != 3 && segments.len() != 4 {
        return Err(ColourParseError::new(
            input,
            Span::new(content_start, content.len()),
            format!("expected 3 or 4 values, found {}", segments.len()),
        )
        .with_help(FORMS_HELP));
    }

    let mut channels = [255u8; 4];
    for (i, (base, segment)) in segments.into_iter().enumerate() {
        let span = Span::of_trimmed(base, segment);
        channels[i] = parse_channel(segment.trim()).map_err(|problem| {
            let message = match problem {
                ChannelProblem::Missing => format!("missing {} value", CHANNEL_NAMES[i]),
                ChannelProblem::NotNumeric => {
                    format!("{} value '{}' is not an integer", CHANNEL_NAMES[i], segment.trim())
                }
                ChannelProblem::OutOfRange => format!(
                    "{} value {} is out of range",
                    CHANNEL_NAMES[i],
                    segment.trim()
                ),
            };
            ColourParseError::new(input, span, message)
                .with_help("Channel values must be integers from 0 to 255")
        })?;
    }

    Ok(Colour::new(channels[0], channels[1], channels[2], channels[3]))
}

enum ChannelProblem {
    Missing,
    NotNumeric,
    OutOfRange,
}

fn parse_channel(token: &str) -> std::result::Result<u8, ChannelProblem> {
    if token.is_empty() {
        return Err(ChannelProblem::Missing);
    }

    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChannelProblem::NotNumeric);
    }

    match token.parse::<i64>() {
        Ok(v) if (0..=255).contains(&v) => Ok(v as u8),
        _ => Err(ChannelProblem::OutOfRange),
    }
}
