//! TIFF primitives for EXIF decoding.
//!
//! The EXIF block inside a JPEG APP1 segment is a classic TIFF stream: a
//! header declaring byte order and the first IFD offset, followed by IFDs
//! whose entries hold typed values.
//!
//! # Key Concepts
//!
//! - **Byte order**: EXIF blocks declare their endianness (II = little-endian,
//!   MM = big-endian) in the header. All multi-byte values must be read
//!   respecting this order.
//!
//! - **IFD (Image File Directory)**: A list of 12-byte entries. EXIF adds
//!   sub-IFDs (Exif, GPS, Interoperability) reached through pointer tags.
//!
//! - **Inline vs offset values**: Values of at most 4 bytes are stored inline
//!   in the IFD entry, larger values at an offset relative to the header.

mod parser;
mod tags;
mod values;

pub use parser::{ByteOrder, IfdEntry, TiffHeader, IFD_ENTRY_SIZE, INLINE_VALUE_SIZE, TIFF_HEADER_SIZE};
pub use tags::{FieldType, IfdKind};
pub use values::{
    decode_rational, decode_string, decode_undefined_text, decode_value, format_decimal,
    format_number, Degree, TagValue,
};
