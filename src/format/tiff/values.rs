//! TIFF tag value decoding.
//!
//! An entry's raw bytes (inline or fetched from its offset) are turned into a
//! [`TagValue`] according to the entry's field type. Numeric arrays with a
//! single element collapse to scalars, so callers can match on `Integer` or
//! `Double` for the common case.

use std::fmt;

use bytes::Bytes;

use super::parser::ByteOrder;
use super::tags::FieldType;

// =============================================================================
// TagValue
// =============================================================================

/// A decoded EXIF tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// A single integer (BYTE, SHORT, LONG, SLONG)
    Integer(i64),

    /// Several integers
    IntegerArray(Vec<i64>),

    /// A single rational, as a double
    Double(f64),

    /// Several rationals
    DoubleArray(Vec<f64>),

    /// Text (ASCII, version strings, sniffed UNDEFINED text)
    Text(String),

    /// Uninterpreted bytes (UNDEFINED, maker notes)
    Bytes(Bytes),

    /// A degrees/minutes/seconds coordinate
    Degree(Degree),

    /// A GPS time of day rendered as `H:M:S`
    Timestamp(String),
}

impl TagValue {
    /// The value as an integer, when it is a single integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TagValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a double, when it is a single number of either kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Integer(v) => Some(*v as f64),
            TagValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as text, when it is text or a timestamp.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) | TagValue::Timestamp(s) => Some(s),
            _ => None,
        }
    }

    /// The value as raw bytes.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            TagValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The value as a coordinate.
    pub fn as_degree(&self) -> Option<Degree> {
        match self {
            TagValue::Degree(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Integer(v) => write!(f, "{}", v),
            TagValue::IntegerArray(values) => write_joined(f, values.iter().map(i64::to_string)),
            TagValue::Double(v) => f.write_str(&format_number(*v)),
            TagValue::DoubleArray(values) => {
                write_joined(f, values.iter().map(|v| format_number(*v)))
            }
            TagValue::Text(s) | TagValue::Timestamp(s) => f.write_str(s),
            TagValue::Bytes(bytes) => write_joined(f, bytes.iter().map(u8::to_string)),
            TagValue::Degree(d) => write!(f, "{}", d),
        }
    }
}

fn write_joined<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator<Item = String>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&item)?;
    }
    Ok(())
}

// =============================================================================
// Degree
// =============================================================================

/// A geographic coordinate stored as degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degree(f64);

impl Degree {
    /// Combine degree, minute and second components into decimal degrees.
    pub fn new(degree: f64, minute: f64, second: f64) -> Self {
        Degree(degree + minute / 60.0 + second / 3600.0)
    }

    /// Build from a rational array; missing components count as zero.
    pub fn from_components(values: &[f64]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Degree::new(at(0), at(1), at(2))
    }

    /// Decimal degrees.
    #[inline]
    pub fn decimal(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Degree {
    /// Renders as `D° M' S" / DD.DDDDD°`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dms = self.0;
        let d = dms.floor();
        let m = (60.0 * (dms - d)).floor();
        let s = 60.0 * ((dms - d) * 60.0 - m);
        write!(
            f,
            "{}\u{00B0} {}' {}\" / {}\u{00B0}",
            d as i64,
            m as i64,
            format_decimal(s, 2),
            format_decimal(dms, 5)
        )
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode an entry's value bytes according to its field type.
///
/// # Arguments
/// * `field_type` - Resolved field type of the entry
/// * `byte_order` - Byte order of the EXIF block
/// * `bytes` - Value bytes (the inline field, or the bytes at the offset)
/// * `count` - Number of values declared by the entry
/// * `raw` - The entry's value field as a 32-bit integer, used for unknown types
pub fn decode_value(
    field_type: FieldType,
    byte_order: ByteOrder,
    bytes: &[u8],
    count: u32,
    raw: u32,
) -> TagValue {
    let count = count as usize;
    let size = field_type.size_in_bytes();

    match field_type {
        FieldType::Unknown => TagValue::Integer(raw as i64),
        FieldType::Undefined => {
            TagValue::Bytes(Bytes::copy_from_slice(&bytes[..count.min(bytes.len())]))
        }
        FieldType::Ascii => TagValue::Text(decode_string(&bytes[..count.min(bytes.len())])),
        FieldType::Rational | FieldType::SRational => {
            let signed = field_type == FieldType::SRational;
            let values: Vec<f64> = bytes
                .chunks_exact(size)
                .take(count)
                .map(|chunk| {
                    decode_rational(
                        byte_order.read_u32(&chunk[0..4]),
                        byte_order.read_u32(&chunk[4..8]),
                        signed,
                    )
                })
                .collect();
            collapse(values, TagValue::Double, TagValue::DoubleArray)
        }
        FieldType::Byte | FieldType::Short | FieldType::Long | FieldType::SLong => {
            let values: Vec<i64> = bytes
                .chunks_exact(size)
                .take(count)
                .map(|chunk| match field_type {
                    FieldType::Byte => chunk[0] as i64,
                    FieldType::Short => byte_order.read_u16(chunk) as i64,
                    FieldType::SLong => byte_order.read_i32(chunk) as i64,
                    _ => byte_order.read_u32(chunk) as i64,
                })
                .collect();
            collapse(values, TagValue::Integer, TagValue::IntegerArray)
        }
    }
}

fn collapse<T>(
    mut values: Vec<T>,
    scalar: fn(T) -> TagValue,
    array: fn(Vec<T>) -> TagValue,
) -> TagValue {
    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return scalar(value);
        }
    }
    array(values)
}

/// Decode a rational as `numerator / denominator`.
///
/// A zero denominator yields 0. So does a numerator outside the signed 32-bit
/// range excluding `i32::MIN`, for both signed and unsigned rationals.
pub fn decode_rational(numerator: u32, denominator: u32, signed: bool) -> f64 {
    let (num, den) = if signed {
        (numerator as i32 as i64, denominator as i32 as i64)
    } else {
        (numerator as i64, denominator as i64)
    };

    if den == 0 || num < -(i32::MAX as i64) || num > i32::MAX as i64 {
        return 0.0;
    }
    num as f64 / den as f64
}

/// Decode a NUL-terminated string.
///
/// Trailing NULs are stripped. Bytes that are not valid UTF-8 are read as
/// Latin-1.
pub fn decode_string(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let bytes = &bytes[..end];

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Character code prefixes of EXIF text stored as UNDEFINED.
const PREFIX_UNDEFINED: [u8; 8] = [0; 8];
const PREFIX_ASCII: &[u8; 8] = b"ASCII\0\0\0";
const PREFIX_UNICODE: &[u8; 8] = b"UNICODE\0";

/// Interpret an UNDEFINED value carrying an 8-byte character code prefix.
///
/// ASCII and undefined-code text are read as UTF-8, UNICODE as UTF-16BE.
/// The body is kept as written, padding included. Returns `None` for buffers
/// shorter than the prefix and for any other code (JIS included).
pub fn decode_undefined_text(bytes: &[u8]) -> Option<String> {
    if bytes.len() < 8 {
        return None;
    }
    let (prefix, body) = bytes.split_at(8);

    let text = if prefix == PREFIX_ASCII || prefix == PREFIX_UNDEFINED {
        String::from_utf8_lossy(body).into_owned()
    } else if prefix == PREFIX_UNICODE {
        let mut units = body.chunks_exact(2);
        let mut text: String = char::decode_utf16(
            units
                .by_ref()
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]])),
        )
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
        if !units.remainder().is_empty() {
            text.push(char::REPLACEMENT_CHARACTER);
        }
        text
    } else {
        return None;
    };

    Some(text)
}

// =============================================================================
// Number Formatting
// =============================================================================

/// Format a number with up to six fractional digits and no trailing zeros.
pub fn format_number(value: f64) -> String {
    format_decimal(value, 6)
}

/// Format a number with at most `max_fraction_digits` fractional digits,
/// dropping trailing zeros and a trailing decimal point.
pub fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    let mut s = format!("{:.*}", max_fraction_digits, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
