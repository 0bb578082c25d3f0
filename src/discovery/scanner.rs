//! Input directory scanning and output path derivation.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AsciiError, Result};

/// Default marker inserted before the extension of batch outputs.
pub const DEFAULT_SUFFIX: &str = "_ascii";

/// List the files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped, not descended into. Files are returned
/// whatever their extension; unsupported ones fail later when decoded.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AsciiError::Directory {
            path: dir.to_path_buf(),
            message: "not a readable directory".to_string(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| AsciiError::Directory {
            path: dir.to_path_buf(),
            message: format!("Failed to read directory: {}", e),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Output path for a batch input: `out_dir/<stem><suffix>.<ext>`.
///
/// `photo.png` with suffix `_ascii` becomes `photo_ascii.png`. Only the
/// last extension is split off, so `a.b.jpg` becomes `a.b_ascii.jpg`.
pub fn derive_output_path(input: &Path, out_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    out_dir.join(name)
}

/// Default output for single-file mode: `out.<ext>` next to the input.
pub fn default_output_file(input: &Path) -> PathBuf {
    let name = match input.extension() {
        Some(ext) => format!("out.{}", ext.to_string_lossy()),
        None => "out".to_string(),
    };

    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Create `dir` (and parents) if it doesn't exist yet.
///
/// Returns `true` if the directory was created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| AsciiError::Directory {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    Ok(true)
}
