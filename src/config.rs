//! Command-line configuration for jpeg-meta.
//!
//! Options can also be set through environment variables with the
//! `JPEG_META_` prefix:
//!
//! - `JPEG_META_FORMAT` - Output format, `text` or `json` (default: text)
//! - `JPEG_META_VERBOSE` - Enable debug logging (default: false)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use jpeg_meta::config::{Cli, Command};
//!
//! let cli = Cli::parse();
//! if let Command::Exif(args) = &cli.command {
//!     println!("Reading {}", args.file.display());
//! }
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::exif::ExifTag;

// =============================================================================
// CLI Arguments
// =============================================================================

/// jpeg-meta - Read EXIF and XMP metadata from JPEG files.
#[derive(Parser, Debug, Clone)]
#[command(name = "jpeg-meta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "JPEG_META_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Enable verbose (debug) logging.
    #[arg(short, long, default_value_t = false, env = "JPEG_META_VERBOSE", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Label: value` line per item
    Text,

    /// A pretty-printed JSON document
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the EXIF tags of a JPEG file.
    Exif(ExifArgs),

    /// Print the GPS position of a JPEG file.
    Gps(FileArgs),

    /// Print the panorama description and texture rectangle of a JPEG file.
    Pano(PanoArgs),

    /// List the APP1 segments of a JPEG file.
    Segments(FileArgs),
}

impl Command {
    /// The file the command reads.
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Exif(args) => &args.file,
            Command::Gps(args) | Command::Segments(args) => &args.file,
            Command::Pano(args) => &args.file,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// JPEG file to read.
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExifArgs {
    /// JPEG file to read.
    pub file: PathBuf,

    /// Only print this tag (by name, e.g. `Make` or `GpsLatitude`). Repeatable.
    #[arg(long = "tag", value_name = "NAME")]
    pub tags: Vec<String>,
}

impl ExifArgs {
    /// Resolve the `--tag` names, case-insensitively.
    ///
    /// Returns an empty filter when no tag was given, which extracts every
    /// labelled tag.
    pub fn resolve_tags(&self) -> Result<Vec<ExifTag>, String> {
        self.tags
            .iter()
            .map(|name| {
                ExifTag::from_name(name).ok_or_else(|| format!("unknown EXIF tag name '{}'", name))
            })
            .collect()
    }
}

#[derive(Args, Debug, Clone)]
pub struct PanoArgs {
    /// JPEG file to read.
    pub file: PathBuf,

    /// Displayed image width in pixels (default: from EXIF, then XMP).
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Displayed image height in pixels (default: from EXIF, then XMP).
    #[arg(long, requires = "width")]
    pub height: Option<u32>,
}

impl PanoArgs {
    /// Validate the arguments.
    ///
    /// Returns an error message if an explicit image size is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err("image width and height must be greater than 0".to_string());
        }
        Ok(())
    }

    /// The explicit image size, if both dimensions were given.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }
}
