//! Convert command implementation.
//!
//! Resolves flags and settings into a single [`Plan`], then converts one file
//! or fans a whole directory out over the batch pipeline.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args};

use crate::batch::{plan_jobs, BatchPipeline, BatchReport, DEFAULT_WORKERS};
use crate::discovery::{
    default_output_file, ensure_allowed_format, ensure_output_dir, scan_images, Settings,
    DEFAULT_SUFFIX,
};
use crate::error::{AsciiError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_colour;
use crate::render::{AsciiRenderer, GlyphRasterizer, RenderOptions, DEFAULT_CHUNK_SIZE};
use crate::types::Colour;

/// Convert an image or a directory of images to ASCII art
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "dir"])))]
pub struct ConvertArgs {
    /// Image file to convert (.jpg, .jpeg, .png)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory of images to convert
    #[arg(long, short = 'd', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Output file for --file (default: out.<ext> next to the input)
    #[arg(long, value_name = "PATH", conflicts_with = "dir")]
    pub output_file: Option<PathBuf>,

    /// Output directory for --dir (default: the input directory)
    #[arg(long, value_name = "PATH", conflicts_with = "file")]
    pub output_dir: Option<PathBuf>,

    /// Glyph colour as #RGB, #RRGGBB, rgb(r, g, b) or rgba(r, g, b, a) [default: #FFCF75]
    #[arg(long, value_name = "COLOUR", allow_hyphen_values = true)]
    pub fg: Option<String>,

    /// Background colour, same formats as --fg [default: #000000]
    #[arg(long, value_name = "COLOUR", allow_hyphen_values = true)]
    pub bg: Option<String>,

    /// Worker threads for --dir [default: 5]
    #[arg(long, short = 'j', value_name = "N")]
    pub workers: Option<usize>,

    /// Block edge length in pixels [default: 10]
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<u32>,

    /// Marker inserted before the extension of --dir outputs [default: _ascii]
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,

    /// Settings file (default: ./asciify.yaml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if any file in --dir fails
    #[arg(long)]
    pub strict: bool,
}

/// What a run converts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    File { input: PathBuf, output: PathBuf },
    Directory { input: PathBuf, output: PathBuf },
}

/// Run configuration after merging flags, settings and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub mode: Mode,
    pub options: RenderOptions,
    pub workers: usize,
    pub suffix: String,
    /// Whether the output path was filled in rather than given.
    pub output_defaulted: bool,
}

impl Plan {
    /// Validate arguments and resolve every setting.
    ///
    /// Flags win over settings, settings win over built-in defaults.
    pub fn resolve(args: &ConvertArgs, settings: &Settings) -> Result<Self> {
        let fg = resolve_colour(
            args.fg.as_deref(),
            settings.fg.as_deref(),
            Colour::DEFAULT_FOREGROUND,
        )?;
        let bg = resolve_colour(
            args.bg.as_deref(),
            settings.bg.as_deref(),
            Colour::DEFAULT_BACKGROUND,
        )?;

        let workers = args.workers.or(settings.workers).unwrap_or(DEFAULT_WORKERS);
        if workers == 0 {
            return Err(AsciiError::argument("workers must be at least 1", None));
        }

        let chunk_size = args
            .chunk_size
            .or(settings.chunk_size)
            .unwrap_or(DEFAULT_CHUNK_SIZE);
        if chunk_size == 0 {
            return Err(AsciiError::argument("chunk size must be at least 1", None));
        }

        let suffix = args
            .suffix
            .clone()
            .or_else(|| settings.suffix.clone())
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

        let (mode, output_defaulted) = resolve_mode(args, &suffix)?;

        Ok(Self {
            mode,
            options: RenderOptions::default()
                .with_colours(fg, bg)
                .with_chunk_size(chunk_size),
            workers,
            suffix,
            output_defaulted,
        })
    }
}

fn resolve_colour(flag: Option<&str>, setting: Option<&str>, default: Colour) -> Result<Colour> {
    match flag.or(setting) {
        Some(s) => Ok(parse_colour(s)?),
        None => Ok(default),
    }
}

fn resolve_mode(args: &ConvertArgs, suffix: &str) -> Result<(Mode, bool)> {
    match (&args.file, &args.dir) {
        (Some(_), Some(_)) => Err(AsciiError::argument(
            "both an input file and an input directory were given",
            Some("Use either --file or --dir"),
        )),
        (None, None) => Err(AsciiError::argument(
            "no input file or directory given",
            Some("Use --file <PATH> or --dir <PATH>"),
        )),
        (Some(input), None) => {
            if args.output_dir.is_some() {
                return Err(AsciiError::argument(
                    "--output-dir only applies to --dir",
                    Some("Use --output-file with --file"),
                ));
            }
            ensure_allowed_format(input, "input")?;

            let (output, defaulted) = match &args.output_file {
                Some(output) => {
                    ensure_allowed_format(output, "output")?;
                    (output.clone(), false)
                }
                None => (default_output_file(input), true),
            };

            Ok((
                Mode::File {
                    input: input.clone(),
                    output,
                },
                defaulted,
            ))
        }
        (None, Some(input)) => {
            if args.output_file.is_some() {
                return Err(AsciiError::argument(
                    "--output-file only applies to --file",
                    Some("Use --output-dir with --dir"),
                ));
            }

            let (output, defaulted) = match &args.output_dir {
                Some(output) => (output.clone(), false),
                None => (input.clone(), true),
            };

            if suffix.is_empty() && output == *input {
                return Err(AsciiError::argument(
                    "an empty suffix would overwrite the input images",
                    Some("Pass --output-dir or a non-empty --suffix"),
                ));
            }

            Ok((
                Mode::Directory {
                    input: input.clone(),
                    output,
                },
                defaulted,
            ))
        }
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    run_in(args, printer, &cwd)
}

/// Run with `cwd` as the place to look for an implicit settings file.
pub fn run_in(args: ConvertArgs, printer: &Printer, cwd: &Path) -> Result<()> {
    let settings = match Settings::discover(args.config.as_deref(), cwd)? {
        Some((path, settings)) => {
            printer.info("Settings", &display_path(&path));
            settings
        }
        None => Settings::default(),
    };

    let plan = Plan::resolve(&args, &settings)?;
    let renderer = AsciiRenderer::new(plan.options.clone())?;

    match &plan.mode {
        Mode::File { input, output } => {
            if plan.output_defaulted {
                let message = format!("no output path given, writing {}", display_path(output));
                printer.info("Info", &message);
            }
            convert_single(&renderer, input, output, printer)
        }
        Mode::Directory { input, output } => {
            if plan.output_defaulted {
                let message = format!(
                    "no output directory given, writing to {}",
                    display_path(output)
                );
                printer.info("Info", &message);
            }

            let report = convert_directory(&renderer, &plan, input, output, printer)?;

            if args.json {
                let json = serde_json::to_string_pretty(&report.summary())
                    .map_err(std::io::Error::from)?;
                println!("{}", json);
            }

            if args.strict && report.has_failures() {
                return Err(AsciiError::BatchFailed {
                    failed: report.failed(),
                    total: report.len(),
                });
            }

            Ok(())
        }
    }
}

fn convert_single<F: GlyphRasterizer>(
    renderer: &AsciiRenderer<F>,
    input: &Path,
    output: &Path,
    printer: &Printer,
) -> Result<()> {
    printer.status("Converting", &display_path(input));
    renderer.convert_file(input, output)?;
    printer.success(
        "Converted",
        &format!("{} -> {}", display_path(input), display_path(output)),
    );
    Ok(())
}

fn convert_directory<F: GlyphRasterizer>(
    renderer: &AsciiRenderer<F>,
    plan: &Plan,
    input: &Path,
    output: &Path,
    printer: &Printer,
) -> Result<BatchReport> {
    let inputs = scan_images(input)?;

    if ensure_output_dir(output)? {
        printer.status("Created", &display_path(output));
    }

    let jobs = plan_jobs(inputs, output, &plan.suffix);
    let pipeline = BatchPipeline::new(plan.workers);

    printer.status(
        "Converting",
        &format!(
            "{} from {} ({})",
            plural(jobs.len(), "file", "files"),
            display_path(input),
            plural(pipeline.workers(), "worker", "workers")
        ),
    );

    let report = pipeline.convert(jobs, renderer);
    print_report(&report, printer);

    Ok(report)
}

fn print_report(report: &BatchReport, printer: &Printer) {
    for outcome in report.sorted() {
        match (outcome.output(), outcome.error()) {
            (Some(output), _) => printer.success(
                "Converted",
                &format!("{} -> {}", display_path(&outcome.input), display_path(output)),
            ),
            (None, Some(error)) => printer.error(
                "Failed",
                &format!("{}: {}", display_path(&outcome.input), error),
            ),
            (None, None) => {}
        }
    }

    let summary = format!(
        "{} converted, {} failed",
        plural(report.succeeded(), "file", "files"),
        report.failed()
    );
    if report.has_failures() {
        printer.warning("Finished", &summary);
    } else {
        printer.success("Finished", &summary);
    }
}
