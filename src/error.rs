use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::ColourParseError;

/// Main error type for asciify operations
#[derive(Error, Diagnostic, Debug)]
pub enum AsciiError {
    #[error("IO error: {0}")]
    #[diagnostic(code(asciify::io))]
    IoError(#[from] std::io::Error),

    #[error("Invalid arguments: {message}")]
    #[diagnostic(code(asciify::args))]
    Argument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Colour(#[from] ColourParseError),

    #[error("Invalid settings in {path}: {message}")]
    #[diagnostic(code(asciify::config), help("Check asciify.yaml syntax"))]
    Config { path: PathBuf, message: String },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(asciify::decode))]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(asciify::encode))]
    Encode { path: PathBuf, message: String },

    #[error("Directory error with {path}: {message}")]
    #[diagnostic(code(asciify::directory))]
    Directory { path: PathBuf, message: String },

    #[error("{failed} of {total} file(s) failed to convert")]
    #[diagnostic(
        code(asciify::batch),
        help("Drop --strict to exit successfully on partial failure")
    )]
    BatchFailed { failed: usize, total: usize },
}

impl AsciiError {
    /// Build an argument error with an optional hint.
    pub fn argument(message: impl Into<String>, help: Option<&str>) -> Self {
        AsciiError::Argument {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsciiError>;
