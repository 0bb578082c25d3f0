pub mod completions;
pub mod convert;
pub mod init;

use clap::{Parser, Subcommand};

/// asciify - turn images into ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image or a directory of images
    Convert(convert::ConvertArgs),

    /// Write a default asciify.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
