//! jpeg-meta - Read EXIF and XMP metadata from JPEG files.
//!
//! This binary parses the command line, installs logging and prints the
//! result of one command.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpeg_meta::{
    config::{Cli, Command, ExifArgs, OutputFormat, PanoArgs},
    exif::{extract_exif, read_orientation_and_size, GpsPosition},
    format::{
        jpeg::{scan_file, ScanOutcome, SegmentAction},
        tiff::format_number,
    },
    xmp::{extract_xmp, PanoDescription, PanoRect},
    ExifError, XmpError,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Exif(args) => run_exif(args, cli.format),
        Command::Gps(args) => run_gps(&args.file, cli.format),
        Command::Pano(args) => run_pano(args, cli.format),
        Command::Segments(args) => run_segments(&args.file, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error parsing file: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem, writing to stderr.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "jpeg_meta=debug"
    } else {
        "jpeg_meta=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Failure of a command.
#[derive(Debug, Error)]
enum RunError {
    #[error("{0}")]
    Exif(#[from] ExifError),

    #[error("{0}")]
    Xmp(#[from] XmpError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

fn print_json(value: &Value) -> Result<(), RunError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn gps_text(position: &GpsPosition) -> String {
    format!(
        "{}, {}",
        format_number(position.latitude),
        format_number(position.longitude)
    )
}

// =============================================================================
// exif Command
// =============================================================================

fn run_exif(args: &ExifArgs, format: OutputFormat) -> Result<(), RunError> {
    let filter = args.resolve_tags().map_err(RunError::Usage)?;
    let metadata = extract_exif(&args.file, &filter)?;
    debug!(path = %args.file.display(), tags = metadata.len(), "EXIF extracted");

    let gps = metadata.gps_position();
    let tags = metadata
        .iter()
        .filter_map(|(tag, value)| Some((*tag, tag.label()?, tag.display_value(value))));

    match format {
        OutputFormat::Json => {
            let tags: Vec<Value> = tags
                .map(|(tag, label, value)| {
                    json!({ "name": tag.name(), "label": label, "value": value })
                })
                .collect();
            print_json(&json!({ "gps": gps, "tags": tags }))
        }
        OutputFormat::Text => {
            if metadata.is_empty() {
                println!("No EXIF metadata");
                return Ok(());
            }
            if let Some(position) = &gps {
                println!("GPS Location: {}", gps_text(position));
            }
            for (_, label, value) in tags {
                println!("{}: {}", label, value);
            }
            Ok(())
        }
    }
}

// =============================================================================
// gps Command
// =============================================================================

fn run_gps(path: &Path, format: OutputFormat) -> Result<(), RunError> {
    let position = extract_exif(path, &[])?.gps_position();

    match format {
        OutputFormat::Json => print_json(&json!(position)),
        OutputFormat::Text => {
            match position {
                Some(position) => {
                    println!("Latitude: {}", format_number(position.latitude));
                    println!("Longitude: {}", format_number(position.longitude));
                }
                None => println!("No GPS position"),
            }
            Ok(())
        }
    }
}

// =============================================================================
// pano Command
// =============================================================================

fn run_pano(args: &PanoArgs, format: OutputFormat) -> Result<(), RunError> {
    args.validate().map_err(RunError::Usage)?;

    let document = extract_xmp(&args.file)?;
    let description = document.as_ref().and_then(PanoDescription::from_document);
    let is_panorama = description
        .as_ref()
        .is_some_and(PanoDescription::is_equirectangular);

    let size = match args.image_size() {
        Some((width, height)) => Some((width as f64, height as f64)),
        None => image_size(&args.file, description.as_ref())?,
    };
    let rect = size.map(|(width, height)| match &description {
        Some(description) => description.texture_rect(width, height),
        None => PanoRect::for_flat_image(width, height),
    });

    match format {
        OutputFormat::Json => print_json(&json!({
            "panorama": is_panorama,
            "description": description,
            "image_size": size,
            "texture_rect": rect,
        })),
        OutputFormat::Text => {
            println!("Panorama: {}", if is_panorama { "yes" } else { "no" });
            if let Some(description) = &description {
                print_description(description);
            }
            match (size, rect) {
                (Some((width, height)), Some(rect)) => {
                    println!("Image size: {} x {}", width, height);
                    println!(
                        "Texture rectangle: left {}, top {}, right {}, bottom {}",
                        format_number(rect.left),
                        format_number(rect.top),
                        format_number(rect.right),
                        format_number(rect.bottom)
                    );
                }
                _ => println!("Image size unknown, pass --width and --height"),
            }
            Ok(())
        }
    }
}

/// Image size from the EXIF pixel dimensions, then the XMP cropped area.
fn image_size(
    path: &Path,
    description: Option<&PanoDescription>,
) -> Result<Option<(f64, f64)>, RunError> {
    let (_, exif_size) = read_orientation_and_size(path)?;
    Ok(exif_size
        .filter(|&(width, height)| width > 0 && height > 0)
        .map(|(width, height)| (width as f64, height as f64))
        .or_else(|| description.and_then(PanoDescription::cropped_size)))
}

fn print_description(description: &PanoDescription) {
    let fields = [
        ("Use panorama viewer", &description.use_panorama_viewer),
        ("Projection type", &description.projection_type),
        ("Full width", &description.full_pano_width),
        ("Full height", &description.full_pano_height),
        ("Cropped left", &description.cropped_area_left),
        ("Cropped top", &description.cropped_area_top),
        ("Cropped width", &description.cropped_area_width),
        ("Cropped height", &description.cropped_area_height),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }
}

// =============================================================================
// segments Command
// =============================================================================

fn run_segments(path: &Path, format: OutputFormat) -> Result<(), RunError> {
    let mut segments = Vec::new();
    let outcome = scan_file(path, |segment| -> Result<SegmentAction, io::Error> {
        segments.push((segment.name().to_string(), segment.offset(), segment.length()));
        Ok(SegmentAction::SKIP)
    })?;

    let summary = match outcome {
        ScanOutcome::Scanned(summary) if outcome.is_jpeg() => summary,
        _ => return Err(RunError::Usage("not a JPEG file".to_string())),
    };

    match format {
        OutputFormat::Json => {
            let segments: Vec<Value> = segments
                .iter()
                .map(|(name, offset, length)| {
                    json!({ "name": name, "offset": offset, "length": length })
                })
                .collect();
            print_json(&json!({
                "markers": summary.markers,
                "truncated": summary.truncated,
                "segments": segments,
            }))
        }
        OutputFormat::Text => {
            for (name, offset, length) in &segments {
                println!("APP1 {:<40} offset {:>8}  length {:>6}", name, offset, length);
            }
            println!("{} marker(s), {} APP1 segment(s)", summary.markers, segments.len());
            if summary.truncated {
                println!("Warning: the file ends inside a segment");
            }
            Ok(())
        }
    }
}
