//! Init command implementation.
//!
//! Writes an `asciify.yaml` holding every setting at its default.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Settings, SETTINGS_FILENAME};
use crate::error::{AsciiError, Result};
use crate::output::{display_path, Printer};

/// Write a default asciify.yaml settings file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the settings file into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing asciify.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(SETTINGS_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(AsciiError::argument(
            format!("{} already exists", SETTINGS_FILENAME),
            Some("Use --force to overwrite"),
        ));
    }

    fs::write(&settings_path, Settings::template()).map_err(|e| AsciiError::Config {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&settings_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_settings() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let settings = Settings::load(&dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert_eq!(settings.workers, Some(5));
        assert_eq!(settings.fg.as_deref(), Some("#FFCF75"));
    }

    #[test]
    fn test_init_errors_if_settings_exist() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "workers: 2").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &Printer::new()).is_err());

        // Untouched
        let content = fs::read_to_string(dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert_eq!(content, "workers: 2");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "workers: 2").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert!(content.contains("workers: 5"));
    }
}
