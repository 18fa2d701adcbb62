//! Recursive IFD traversal.
//!
//! The walker reads an IFD's entries through a seekable handle, follows the
//! Exif, GPS and Interoperability pointers into their sub-IFDs, decodes each
//! value and applies the tag-specific refinements (APEX conversions, GPS
//! coordinate composition, text sniffing).
//!
//! Every IFD visit saves the handle's position on entry and restores it on
//! exit, so nested and sibling IFDs compose without disturbing each other.

use std::collections::HashSet;
use std::io::{self, Read, Seek, SeekFrom};

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::format::tiff::{
    decode_string, decode_undefined_text, decode_value, ByteOrder, Degree, FieldType, IfdEntry,
    IfdKind, TagValue, IFD_ENTRY_SIZE,
};

use super::catalog::ExifTag;
use super::metadata::ExifMetadata;

/// Largest out-of-line value accepted: the payload ceiling of an APP1 segment.
const MAX_VALUE_SIZE: u64 = 64 * 1024;

/// Placeholder stored for user comments that do not decode as text.
const BINARY_PLACEHOLDER: &str = "<bin>";

/// Walks the IFDs of one EXIF block.
pub struct IfdWalker<'a, R> {
    reader: &'a mut R,
    tiff_base: u64,
    byte_order: ByteOrder,
    filter: &'a [ExifTag],
    visited: HashSet<u64>,
}

impl<'a, R: Read + Seek> IfdWalker<'a, R> {
    /// Create a walker.
    ///
    /// # Arguments
    /// * `reader` - Seekable handle on the file
    /// * `tiff_base` - Absolute offset of the TIFF header; IFD and value
    ///   offsets are relative to it
    /// * `byte_order` - Byte order declared by the TIFF header
    /// * `filter` - Tags to extract; empty extracts every labelled tag
    pub fn new(
        reader: &'a mut R,
        tiff_base: u64,
        byte_order: ByteOrder,
        filter: &'a [ExifTag],
    ) -> Self {
        Self {
            reader,
            tiff_base,
            byte_order,
            filter,
            visited: HashSet::new(),
        }
    }

    /// Walk the IFD at `ifd_offset` and every sub-IFD it points to.
    ///
    /// The handle's position is restored before returning, on success and on
    /// error. An IFD already visited by this walker is not entered again.
    ///
    /// # Errors
    /// I/O errors, including short reads of entries or out-of-line values,
    /// and out-of-line values larger than 64 KiB. Values stored before the
    /// error stay in `metadata`.
    pub fn walk(
        &mut self,
        ifd_offset: u32,
        kind: IfdKind,
        metadata: &mut ExifMetadata,
    ) -> io::Result<()> {
        let start = self.tiff_base + ifd_offset as u64;
        if !self.visited.insert(start) {
            warn!(offset = ifd_offset, kind = kind.name(), "IFD already visited, skipping");
            return Ok(());
        }

        let saved = self.reader.stream_position()?;
        let result = self.walk_entries(start, kind, metadata);
        self.reader.seek(SeekFrom::Start(saved))?;
        result
    }

    fn walk_entries(
        &mut self,
        start: u64,
        kind: IfdKind,
        metadata: &mut ExifMetadata,
    ) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(start))?;

        let mut count = [0u8; 2];
        self.reader.read_exact(&mut count)?;
        let count = self.byte_order.read_u16(&count);
        trace!(kind = kind.name(), start, count, "Reading IFD");

        for _ in 0..count {
            let mut raw = [0u8; IFD_ENTRY_SIZE];
            self.reader.read_exact(&mut raw)?;
            let entry = IfdEntry::parse(&raw, self.byte_order);
            let tag = ExifTag::from_code(kind, entry.tag);

            if !self.filter.is_empty() && !self.filter.contains(&tag) && !tag.is_ifd_pointer() {
                continue;
            }

            match tag {
                ExifTag::ExifOffset | ExifTag::InteropOffset => {
                    let offset = entry.value_offset(self.byte_order);
                    self.walk(offset, IfdKind::Standard, metadata)?;
                }
                ExifTag::ExifGps => {
                    let offset = entry.value_offset(self.byte_order);
                    self.walk(offset, IfdKind::Gps, metadata)?;
                }
                _ => {
                    let value = self.read_value(&entry, tag)?;
                    trace!(tag = tag.name(), code = entry.tag, value = %value, "IFD entry");

                    if tag == ExifTag::Unknown {
                        debug!(
                            code = entry.tag,
                            kind = kind.name(),
                            value = %value,
                            "Unknown EXIF tag"
                        );
                    } else if tag.label().is_some() {
                        metadata.insert(tag, value);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fetch and decode an entry's value, then apply the tag's refinements.
    fn read_value(&mut self, entry: &IfdEntry, tag: ExifTag) -> io::Result<TagValue> {
        let size = entry.value_byte_size();
        let bytes = if entry.is_inline() {
            Bytes::copy_from_slice(&entry.value_bytes)
        } else {
            self.read_out_of_line(entry.value_offset(self.byte_order), size)?
        };

        let value = if tag == ExifTag::MakerNote {
            // Vendor specific layout, kept raw
            TagValue::Bytes(bytes.slice(..(size as usize).min(bytes.len())))
        } else {
            decode_value(
                entry.field_type,
                self.byte_order,
                &bytes,
                entry.count,
                entry.value_offset(self.byte_order),
            )
        };

        Ok(refine(tag, entry.field_type, value))
    }

    fn read_out_of_line(&mut self, offset: u32, size: u64) -> io::Result<Bytes> {
        if size > MAX_VALUE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("EXIF value of {} bytes exceeds {} bytes", size, MAX_VALUE_SIZE),
            ));
        }

        let saved = self.reader.stream_position()?;
        self.reader
            .seek(SeekFrom::Start(self.tiff_base + offset as u64))?;
        let mut buffer = vec![0u8; size as usize];
        let result = self.reader.read_exact(&mut buffer);
        self.reader.seek(SeekFrom::Start(saved))?;
        result?;

        Ok(Bytes::from(buffer))
    }
}

/// Tag-specific interpretation of a generically decoded value.
fn refine(tag: ExifTag, field_type: FieldType, value: TagValue) -> TagValue {
    let is_version = matches!(
        tag,
        ExifTag::ExifVersion | ExifTag::FlashpixVersion | ExifTag::InteropVersion
    );
    let value = match value {
        TagValue::Bytes(bytes) if is_version => TagValue::Text(decode_string(&bytes)),
        TagValue::Bytes(bytes) if field_type == FieldType::Undefined => {
            match decode_undefined_text(&bytes) {
                Some(text) => TagValue::Text(text),
                None => TagValue::Bytes(bytes),
            }
        }
        other => other,
    };

    match (tag, value) {
        (ExifTag::UserComment, value @ TagValue::Text(_)) => value,
        (ExifTag::UserComment, _) => TagValue::Text(BINARY_PLACEHOLDER.to_string()),
        (ExifTag::ShutterSpeed, TagValue::Double(v)) => TagValue::Double(2f64.powf(-v)),
        (ExifTag::Aperture | ExifTag::MaxAperture, TagValue::Double(v)) => {
            TagValue::Double(2f64.powf(v / 2.0))
        }
        (
            ExifTag::GpsLatitude
            | ExifTag::GpsLongitude
            | ExifTag::GpsDestLatitude
            | ExifTag::GpsDestLongitude,
            TagValue::DoubleArray(components),
        ) => TagValue::Degree(Degree::from_components(&components)),
        (ExifTag::GpsTimestamp, TagValue::DoubleArray(parts)) if parts.len() >= 3 => {
            TagValue::Timestamp(format!(
                "{}:{}:{}",
                parts[0] as i64, parts[1] as i64, parts[2] as i64
            ))
        }
        (_, value) => value,
    }
}
