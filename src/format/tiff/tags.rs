//! TIFF field types and IFD kinds.
//!
//! Field types determine how an entry's value is encoded and how many bytes
//! it occupies. The IFD kind selects the tag namespace: GPS tags reuse small
//! codes that mean something else in a standard IFD.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// Only the types that appear in camera EXIF blocks are recognised. Any other
/// type code resolves to `Unknown`, which has size 0 so its value is always
/// treated as inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Unrecognised type code
    Unknown,

    /// Unsigned 8-bit integer (1 byte)
    Byte,

    /// 8-bit character, NUL terminated (1 byte)
    Ascii,

    /// Unsigned 16-bit integer (2 bytes)
    Short,

    /// Unsigned 32-bit integer (4 bytes)
    Long,

    /// Two unsigned 32-bit integers: numerator, denominator (8 bytes)
    Rational,

    /// Undefined byte data (1 byte per element)
    Undefined,

    /// Signed 32-bit integer (4 bytes)
    SLong,

    /// Two signed 32-bit integers: numerator, denominator (8 bytes)
    SRational,
}

impl FieldType {
    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Unknown => 0,
            FieldType::Byte | FieldType::Ascii | FieldType::Undefined => 1,
            FieldType::Short => 2,
            FieldType::Long | FieldType::SLong => 4,
            FieldType::Rational | FieldType::SRational => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => FieldType::Byte,
            2 => FieldType::Ascii,
            3 => FieldType::Short,
            4 => FieldType::Long,
            5 => FieldType::Rational,
            7 => FieldType::Undefined,
            9 => FieldType::SLong,
            10 => FieldType::SRational,
            _ => FieldType::Unknown,
        }
    }

    /// Whether values of this type are integers.
    #[inline]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            FieldType::Byte | FieldType::Short | FieldType::Long | FieldType::SLong
        )
    }
}

// =============================================================================
// IFD Kinds
// =============================================================================

/// The namespace an IFD's tag codes belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IfdKind {
    /// IFD0, the Exif sub-IFD and the Interoperability sub-IFD
    Standard,
    /// The GPS sub-IFD
    Gps,
}

impl IfdKind {
    /// Human-readable name, used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            IfdKind::Standard => "standard",
            IfdKind::Gps => "GPS",
        }
    }
}
