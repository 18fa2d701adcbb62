//! # jpeg-meta
//!
//! Read EXIF and XMP metadata from JPEG files.
//!
//! This library scans the APP1 segments of a JPEG file and decodes the two
//! metadata blocks they carry: the EXIF block, a small TIFF structure of
//! image file directories (IFDs), and the XMP packet, an RDF/XML document.
//! Files are read sequentially while scanning, and with random access only
//! inside the EXIF block.
//!
//! ## Features
//!
//! - **Segment scanning**: Finds APP1 segments by name, skipping everything
//!   else by length without decoding image data
//! - **EXIF decoding**: Both byte orders, nested Exif/GPS/Interoperability
//!   IFDs, rationals, text sniffing, APEX conversions, GPS coordinates
//! - **Tag catalog**: Display labels, units and value translations
//! - **Panoramas**: Photo Sphere (GPano) detection and texture rectangles
//! - **Thumbnail cache**: In-memory LRU keyed by path and file size
//!
//! ## Architecture
//!
//! - [`io`] - Position-tracking reader and endian helpers
//! - [`mod@format`] - JPEG segment scanner and TIFF primitives
//! - [`exif`] - IFD walker, tag catalog and extracted metadata
//! - [`xmp`] - XMP tree, RDF lookups and panorama queries
//! - [`thumbnail`] - Thumbnail cache
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use jpeg_meta::exif::{extract_exif, ExifTag};
//! use jpeg_meta::xmp::is_panorama;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metadata = extract_exif("IMG_0001.jpg", &[ExifTag::Make, ExifTag::Model])?;
//!     for (tag, value) in &metadata {
//!         println!("{}: {}", tag.name(), tag.display_value(value));
//!     }
//!
//!     if let Some(position) = metadata.gps_position() {
//!         println!("Taken at {}, {}", position.latitude, position.longitude);
//!     }
//!
//!     println!("Panorama: {}", is_panorama("IMG_0001.jpg")?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod format;
pub mod io;
pub mod thumbnail;
pub mod xmp;

// Re-export commonly used types
pub use config::{Cli, Command, OutputFormat};
pub use error::{ExifError, TiffError, XmpError};
pub use exif::{
    extract_exif, read_exif, read_orientation_and_size, ExifMetadata, ExifTag, GpsPosition,
    Orientation,
};
pub use format::tiff::{ByteOrder, Degree, FieldType, IfdEntry, IfdKind, TagValue, TiffHeader};
pub use format::{has_jpeg_extension, scan_file, scan_segments, ScanOutcome, ScanSummary};
pub use thumbnail::{MemoryThumbnailCache, ThumbnailCache};
pub use xmp::{
    extract_xmp, is_panorama, panorama_rect, read_xmp, PanoDescription, PanoRect, XmpDocument,
    XmpElement,
};
