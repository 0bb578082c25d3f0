//! Image format whitelist.

use std::fmt;
use std::path::Path;

use crate::error::{AsciiError, Result};

/// Extensions accepted for input and output images.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Container format of an output image, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Format for a file path, or `None` if its extension isn't allowed.
    /// Matching is case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Check that `path` has an allowed image extension.
///
/// `role` names the path in the error message ("input" / "output").
pub fn ensure_allowed_format(path: &Path, role: &str) -> Result<OutputFormat> {
    OutputFormat::from_path(path).ok_or_else(|| {
        let found = path
            .extension()
            .map(|e| format!("'.{}'", e.to_string_lossy()))
            .unwrap_or_else(|| "no extension".to_string());

        AsciiError::argument(
            format!(
                "{} is not an allowed {} format ({})",
                found,
                role,
                path.display()
            ),
            Some(&format!(
                "Allowed formats: {}",
                ALLOWED_EXTENSIONS
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(" | ")
            )),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.jpg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("a.jpeg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("dir/A.PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.gif")), None);
        assert_eq!(OutputFormat::from_path(Path::new("png")), None);
    }

    #[test]
    fn test_ensure_allowed_format() {
        assert!(ensure_allowed_format(Path::new("photo.jpeg"), "input").is_ok());

        let err = ensure_allowed_format(Path::new("photo.bmp"), "input").unwrap_err();
        match err {
            AsciiError::Argument { message, help } => {
                assert!(message.contains("'.bmp'"));
                assert!(message.contains("input"));
                assert_eq!(help.as_deref(), Some("Allowed formats: .jpg | .jpeg | .png"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ensure_allowed_format_without_extension() {
        let err = ensure_allowed_format(Path::new("photo"), "output").unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }
}
