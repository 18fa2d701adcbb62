//! TIFF header and IFD entry parsing.
//!
//! An EXIF block is a classic TIFF stream embedded in the APP1 segment. All
//! IFD offsets inside it are relative to the first byte of the TIFF header.
//!
//! # TIFF Header Structure
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Version (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```
//!
//! # IFD Entry Structure
//!
//! ```text
//! Bytes 0-1:  Tag code
//! Bytes 2-3:  Field type
//! Bytes 4-7:  Value count
//! Bytes 8-11: Value, or offset to the value when it does not fit
//! ```

use crate::error::TiffError;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

use super::tags::FieldType;

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Lowest accepted TIFF version
const MIN_VERSION: u16 = 42;

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of an IFD entry in bytes
pub const IFD_ENTRY_SIZE: usize = 12;

/// Size of the value/offset field of an IFD entry
pub const INLINE_VALUE_SIZE: u64 = 4;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of an EXIF block.
///
/// Declared by the first two bytes of the TIFF header. Every multi-byte value
/// in the block must be read respecting this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Identify the byte order from the two marker bytes.
    ///
    /// # Errors
    /// `InvalidMagic` if the marker is neither "II" nor "MM".
    pub fn from_marker(bytes: [u8; 2]) -> Result<Self, TiffError> {
        // Read as big-endian so the error shows the bytes in file order
        let magic = u16::from_be_bytes(bytes);
        match magic {
            BYTE_ORDER_LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
            BYTE_ORDER_BIG_ENDIAN => Ok(ByteOrder::BigEndian),
            _ => Err(TiffError::InvalidMagic(magic)),
        }
    }

    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Read a two's-complement i32 from a byte slice using this byte order.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        self.read_u32(bytes) as i32
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header at the start of an EXIF block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the block
    pub byte_order: ByteOrder,

    /// Declared TIFF version (at least 42)
    pub version: u16,

    /// Offset to the first IFD, relative to the header start
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse a TIFF header from raw bytes.
    ///
    /// # Arguments
    /// * `bytes` - Raw header bytes (at least 8)
    ///
    /// # Errors
    /// - `FileTooSmall` if there aren't enough bytes for the header
    /// - `InvalidMagic` if byte order bytes are not II or MM
    /// - `InvalidVersion` if the version is below 42
    pub fn parse(bytes: &[u8]) -> Result<Self, TiffError> {
        if bytes.len() < TIFF_HEADER_SIZE {
            return Err(TiffError::FileTooSmall {
                required: TIFF_HEADER_SIZE as u64,
                actual: bytes.len() as u64,
            });
        }

        let byte_order = ByteOrder::from_marker([bytes[0], bytes[1]])?;

        let version = byte_order.read_u16(&bytes[2..4]);
        if version < MIN_VERSION {
            return Err(TiffError::InvalidVersion(version));
        }

        Ok(TiffHeader {
            byte_order,
            version,
            first_ifd_offset: byte_order.read_u32(&bytes[4..8]),
        })
    }
}

// =============================================================================
// IfdEntry
// =============================================================================

/// A single 12-byte entry of an Image File Directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Tag code
    pub tag: u16,

    /// Field type as stored in the file
    pub field_type_raw: u16,

    /// Resolved field type (`Unknown` for unrecognised codes)
    pub field_type: FieldType,

    /// Number of values
    pub count: u32,

    /// Raw value/offset field, still in file byte order
    pub value_bytes: [u8; 4],
}

impl IfdEntry {
    /// Parse an entry from its 12 raw bytes.
    pub fn parse(bytes: &[u8; IFD_ENTRY_SIZE], byte_order: ByteOrder) -> Self {
        let field_type_raw = byte_order.read_u16(&bytes[2..4]);
        IfdEntry {
            tag: byte_order.read_u16(&bytes[0..2]),
            field_type_raw,
            field_type: FieldType::from_u16(field_type_raw),
            count: byte_order.read_u32(&bytes[4..8]),
            value_bytes: [bytes[8], bytes[9], bytes[10], bytes[11]],
        }
    }

    /// Total size of the value in bytes.
    #[inline]
    pub fn value_byte_size(&self) -> u64 {
        self.count as u64 * self.field_type.size_in_bytes() as u64
    }

    /// Whether the value is stored in the entry itself.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.value_byte_size() <= INLINE_VALUE_SIZE
    }

    /// The value field read as an offset (or as a raw 32-bit value).
    #[inline]
    pub fn value_offset(&self, byte_order: ByteOrder) -> u32 {
        byte_order.read_u32(&self.value_bytes)
    }
}

// =============================================================================
// Tests
// =============================================================================
