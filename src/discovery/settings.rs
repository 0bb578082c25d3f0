//! Settings file (asciify.yaml) parsing.
//!
//! Every key is optional; command-line flags override whatever the file
//! sets, and the file overrides the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AsciiError, Result};

use super::SETTINGS_FILENAME;

/// Settings loaded from asciify.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Foreground (glyph) colour string.
    pub fg: Option<String>,

    /// Background (canvas) colour string.
    pub bg: Option<String>,

    /// Worker threads for directory mode.
    pub workers: Option<usize>,

    /// Block edge length in pixels.
    pub chunk_size: Option<u32>,

    /// Marker inserted before the extension of batch outputs.
    pub suffix: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AsciiError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content).map_err(|message| AsciiError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Find and load settings.
    ///
    /// An explicit path must exist. Without one, `asciify.yaml` in `cwd` is
    /// used if present. Returns the path that was loaded alongside the
    /// settings.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<(PathBuf, Self)>> {
        if let Some(path) = explicit {
            return Ok(Some((path.to_path_buf(), Self::load(path)?)));
        }

        let implicit = cwd.join(SETTINGS_FILENAME);
        if implicit.is_file() {
            return Ok(Some((implicit.clone(), Self::load(&implicit)?)));
        }

        Ok(None)
    }

    /// Contents written by `asciify init`: every key at its default.
    pub fn template() -> String {
        [
            "# asciify settings. Command-line flags override these values.",
            "fg: \"#FFCF75\"",
            "bg: \"#000000\"",
            "workers: 5",
            "chunk_size: 10",
            "suffix: _ascii",
            "",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_settings() {
        let yaml = r##"
fg: "#fff"
bg: rgb(10, 20, 30)
workers: 8
chunk_size: 12
suffix: -art
"##;
        let settings = Settings::parse(yaml).unwrap();

        assert_eq!(
            settings,
            Settings {
                fg: Some("#fff".to_string()),
                bg: Some("rgb(10, 20, 30)".to_string()),
                workers: Some(8),
                chunk_size: Some(12),
                suffix: Some("-art".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings = Settings::parse("workers: 2").unwrap();
        assert_eq!(settings.workers, Some(2));
        assert!(settings.fg.is_none());
        assert!(settings.suffix.is_none());
    }

    #[test]
    fn test_parse_empty_settings() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
        assert_eq!(Settings::parse("\n  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Settings::parse("colour: red").is_err());
    }

    #[test]
    fn test_template_round_trips() {
        let settings = Settings::parse(&Settings::template()).unwrap();
        assert_eq!(settings.fg.as_deref(), Some("#FFCF75"));
        assert_eq!(settings.bg.as_deref(), Some("#000000"));
        assert_eq!(settings.workers, Some(5));
        assert_eq!(settings.chunk_size, Some(10));
        assert_eq!(settings.suffix.as_deref(), Some("_ascii"));
    }

    #[test]
    fn test_discover_implicit_file() {
        let dir = tempdir().unwrap();
        assert!(Settings::discover(None, dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(SETTINGS_FILENAME), "workers: 3").unwrap();
        let (path, settings) = Settings::discover(None, dir.path()).unwrap().unwrap();

        assert_eq!(path, dir.path().join(SETTINGS_FILENAME));
        assert_eq!(settings.workers, Some(3));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let err = Settings::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, AsciiError::Config { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "workers: [1, 2").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, AsciiError::Config { .. }));
    }
}
