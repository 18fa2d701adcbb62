use thiserror::Error;

/// Errors in the TIFF header that starts an EXIF block.
///
/// These are fatal to the extraction call: without a byte order nothing else
/// in the block can be decoded.
#[derive(Debug, Clone, Error)]
pub enum TiffError {
    /// Invalid byte order mark (not II or MM)
    #[error("Invalid EXIF byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidMagic(u16),

    /// TIFF version below the minimum supported (42)
    #[error("Invalid EXIF version: expected at least 42, got {0}")]
    InvalidVersion(u16),

    /// Segment is too small to contain a TIFF header
    #[error("EXIF block too small: need at least {required} bytes, got {actual}")]
    FileTooSmall { required: u64, actual: u64 },
}

/// Errors that can occur while extracting EXIF metadata.
#[derive(Debug, Error)]
pub enum ExifError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TIFF header
    #[error("TIFF error: {0}")]
    Tiff(#[from] TiffError),
}

/// Errors that can occur while extracting XMP metadata.
#[derive(Debug, Error)]
pub enum XmpError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XMP packet is not well-formed XML
    #[error("Error parsing XMP: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for XmpError {
    fn from(err: quick_xml::Error) -> Self {
        XmpError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmpError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmpError::Xml(err.to_string())
    }
}
