//! EXIF metadata extraction.
//!
//! EXIF data lives in an APP1 segment named `Exif`, as a TIFF block:
//!
//! ```text
//! "Exif\0" | pad | TIFF header (8 bytes) | IFD0 ... Exif IFD ... GPS IFD ...
//! ```
//!
//! All IFD and value offsets are relative to the TIFF header. Extraction
//! scans the file for the segment, validates the header, then walks IFD0 and
//! the sub-IFDs it points to, decoding every tag the catalog labels.
//!
//! # Example
//!
//! ```no_run
//! use jpeg_meta::exif::{extract_exif, ExifTag};
//!
//! let metadata = extract_exif("photo.jpg", &[])?;
//! for (tag, value) in &metadata {
//!     if let Some(label) = tag.label() {
//!         println!("{}: {}", label, tag.display_value(value));
//!     }
//! }
//! # Ok::<(), jpeg_meta::ExifError>(())
//! ```

mod catalog;
mod labels;
mod metadata;
mod reader;
mod walker;

pub use catalog::{ExifTag, TagInfo};
pub use labels::ValueLabels;
pub use metadata::{ExifMetadata, GpsPosition, Orientation};
pub use reader::{extract_exif, read_exif, read_orientation_and_size, EXIF_SEGMENT_NAME};
pub use walker::IfdWalker;
