//! Finding inputs, outputs and settings on disk.
//!
//! This module handles the filesystem side of a run: which files a directory
//! holds, where each output goes, which image formats are allowed, and the
//! optional `asciify.yaml` settings file.
//!
//! # Example
//!
//! ```ignore
//! use asciify::discovery::{derive_output_path, scan_images, DEFAULT_SUFFIX};
//!
//! for input in scan_images(Path::new("photos"))? {
//!     let output = derive_output_path(&input, Path::new("ascii"), DEFAULT_SUFFIX);
//!     println!("{} -> {}", input.display(), output.display());
//! }
//! ```

mod formats;
mod scanner;
mod settings;

pub use formats::{ensure_allowed_format, OutputFormat, ALLOWED_EXTENSIONS};
pub use scanner::{
    default_output_file, derive_output_path, ensure_output_dir, scan_images, DEFAULT_SUFFIX,
};
pub use settings::Settings;

/// The name of the settings file.
pub const SETTINGS_FILENAME: &str = "asciify.yaml";
