//! Container formats.
//!
//! - [`jpeg`] walks the marker segments of a JPEG stream and hands APP1
//!   segments to a callback
//! - [`tiff`] holds the TIFF primitives EXIF blocks are made of: the header,
//!   IFD entries, field types and value decoding
//! - [`detect`] recognizes JPEG file names

pub mod detect;
pub mod jpeg;
pub mod tiff;

pub use detect::has_jpeg_extension;
pub use jpeg::{scan_file, scan_segments, ScanOutcome, ScanSummary, Segment, SegmentAction};
