//! JPEG marker segment scanning.
//!
//! A JPEG file is a sequence of marker segments. Metadata lives in the APP1
//! segments, which start with a NUL-terminated name identifying their content
//! (`Exif` for EXIF, the XMP namespace URI for XMP). The scanner walks the
//! stream once, front to back, and hands each APP1 segment to a caller
//! supplied handler.
//!
//! # Segment Layout
//!
//! ```text
//! 0xFF <marker> <length: u16 BE> <payload: length - 2 bytes>
//! ```
//!
//! Markers 0xD0-0xD8 (restart markers and SOI) stand alone, DRI carries a
//! fixed 4-byte payload, and EOI ends the image.
//!
//! # Skipping
//!
//! The handler receives a reader bounded to the segment. Whatever it leaves
//! unread is skipped by byte count afterwards, so the scanner always lands on
//! the next marker regardless of how much the handler consumed.

use std::fs::File;
use std::io::{self, BufReader, Read, Take};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::io::PositionReader;

use super::detect::has_jpeg_extension;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Marker prefix byte
const MARKER_PREFIX: u8 = 0xFF;

/// Stuffed literal 0xFF inside entropy-coded data
const STUFFED: u8 = 0x00;

/// First restart marker
const RST0: u8 = 0xD0;

/// Start Of Image
const SOI: u8 = 0xD8;

/// End Of Image
const EOI: u8 = 0xD9;

/// Define Restart Interval
const DRI: u8 = 0xDD;

/// Application segment 1 (EXIF, XMP)
const APP1: u8 = 0xE1;

/// Fixed payload size of a DRI segment
const DRI_PAYLOAD_SIZE: u64 = 4;

/// Read buffer size for file scanning, shared by the EXIF and XMP readers.
pub(crate) const SCAN_BUFFER_SIZE: usize = 64 * 1024;

// =============================================================================
// Handler Protocol
// =============================================================================

/// What a segment handler did with its segment.
///
/// The two flags are independent: `consumed` is the handler's claim that it
/// read the whole segment, `stop` ends the scan. Only `stop` changes what the
/// scanner does next; the unread remainder is always measured, never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAction {
    /// The handler read the segment to its end
    pub consumed: bool,

    /// No further segments are needed
    pub stop: bool,
}

impl SegmentAction {
    /// The segment was not read; the scanner skips it.
    pub const SKIP: SegmentAction = SegmentAction {
        consumed: false,
        stop: false,
    };

    /// The segment was read; scanning continues.
    pub const CONSUMED: SegmentAction = SegmentAction {
        consumed: true,
        stop: false,
    };

    /// The segment was read and nothing else is needed.
    pub const STOP: SegmentAction = SegmentAction {
        consumed: true,
        stop: true,
    };
}

/// An APP1 segment, handed to the handler for the duration of one call.
pub struct Segment<'a, R> {
    name: &'a str,
    offset: u64,
    length: u64,
    reader: Take<&'a mut PositionReader<R>>,
}

impl<R: Read> Segment<'_, R> {
    /// The segment's NUL-terminated name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Absolute offset in the stream of the first byte after the name.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of data bytes following the name.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Number of data bytes not yet read.
    pub fn remaining(&self) -> u64 {
        self.reader.limit()
    }
}

impl<R: Read> Read for Segment<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

// =============================================================================
// Scan Results
// =============================================================================

/// Statistics of a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of markers found
    pub markers: usize,

    /// The stream ended inside a segment or a length was corrupt
    pub truncated: bool,

    /// A handler asked to stop
    pub stopped: bool,
}

/// Result of scanning a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The file was not scanned because its extension is not JPEG
    NotJpeg,

    /// The file was scanned
    Scanned(ScanSummary),
}

impl ScanOutcome {
    /// Whether the file was confirmed as JPEG, i.e. at least one marker was found.
    ///
    /// A truncated scan still counts once a marker has been seen.
    pub fn is_jpeg(&self) -> bool {
        matches!(self, ScanOutcome::Scanned(summary) if summary.markers > 0)
    }

    /// The scan statistics, if the file was scanned.
    pub fn summary(&self) -> Option<&ScanSummary> {
        match self {
            ScanOutcome::NotJpeg => None,
            ScanOutcome::Scanned(summary) => Some(summary),
        }
    }
}

// =============================================================================
// Scanning
// =============================================================================

/// Scan the APP1 segments of a JPEG file.
///
/// Returns [`ScanOutcome::NotJpeg`] without opening the file when its
/// extension is not `.jpg` or `.jpeg`.
///
/// # Errors
/// Opening the file, non-EOF read errors, and any error returned by the
/// handler.
pub fn scan_file<P, F, E>(path: P, on_segment: F) -> Result<ScanOutcome, E>
where
    P: AsRef<Path>,
    F: FnMut(&mut Segment<'_, BufReader<File>>) -> Result<SegmentAction, E>,
    E: From<io::Error>,
{
    let path = path.as_ref();
    if !has_jpeg_extension(path) {
        debug!(path = %path.display(), "Not a JPEG file name, skipping scan");
        return Ok(ScanOutcome::NotJpeg);
    }

    let file = File::open(path)?;
    let reader = BufReader::with_capacity(SCAN_BUFFER_SIZE, file);
    scan_segments(reader, on_segment).map(ScanOutcome::Scanned)
}

/// Scan the APP1 segments of a JPEG stream.
///
/// The stream is read front to back exactly once. Truncation is not an
/// error: it ends the scan and is reported in the summary.
///
/// # Arguments
/// * `reader` - JPEG byte stream, positioned at its start
/// * `on_segment` - Called once per APP1 segment
///
/// # Errors
/// Non-EOF read errors, and any error returned by the handler.
pub fn scan_segments<R, F, E>(reader: R, mut on_segment: F) -> Result<ScanSummary, E>
where
    R: Read,
    F: FnMut(&mut Segment<'_, R>) -> Result<SegmentAction, E>,
    E: From<io::Error>,
{
    let mut reader = PositionReader::new(reader);
    let mut summary = ScanSummary::default();

    loop {
        let marker = match find_marker(&mut reader)? {
            Some(marker) => marker,
            None => break,
        };
        summary.markers += 1;

        match marker {
            EOI => break,
            DRI => {
                if reader.skip(DRI_PAYLOAD_SIZE)? != DRI_PAYLOAD_SIZE {
                    summary.truncated = true;
                    break;
                }
            }
            RST0..=SOI => {}
            _ => {
                let length = match read_length(&mut reader)? {
                    Some(length) if length >= 2 => length as u64,
                    Some(length) => {
                        warn!(marker, length, "Corrupt segment length");
                        summary.truncated = true;
                        break;
                    }
                    None => {
                        summary.truncated = true;
                        break;
                    }
                };
                let payload = length - 2;

                if marker != APP1 {
                    trace!(marker, length, "Skipping segment");
                    if reader.skip(payload)? != payload {
                        summary.truncated = true;
                        break;
                    }
                    continue;
                }

                let (name, name_size) = match read_name(&mut reader, payload)? {
                    Some(name) => name,
                    None => {
                        summary.truncated = true;
                        break;
                    }
                };
                let remaining = payload - name_size;
                let offset = reader.position();
                trace!(name = %name, offset, length = remaining, "APP1 segment");

                let mut segment = Segment {
                    name: &name,
                    offset,
                    length: remaining,
                    reader: Read::take(&mut reader, remaining),
                };
                let action = on_segment(&mut segment)?;
                let unread = segment.remaining();

                if action.stop {
                    summary.stopped = true;
                    break;
                }
                if action.consumed && unread > 0 {
                    debug!(name = %name, unread, "Segment handler left bytes unread");
                }
                if reader.skip(unread)? != unread {
                    summary.truncated = true;
                    break;
                }
            }
        }
    }

    if summary.truncated {
        warn!(
            markers = summary.markers,
            position = reader.position(),
            "JPEG stream ended inside a segment"
        );
    }

    Ok(summary)
}

/// Find the next marker, returning its second byte.
///
/// `0xFF 0x00` is a stuffed literal and `0xFF 0xFF` is fill; neither starts
/// a marker. Returns `None` at end of stream.
fn find_marker<R: Read>(reader: &mut PositionReader<R>) -> io::Result<Option<u8>> {
    let mut previous = 0u8;
    while let Some(byte) = reader.read_byte()? {
        if previous == MARKER_PREFIX && byte != STUFFED && byte != MARKER_PREFIX {
            return Ok(Some(byte));
        }
        previous = byte;
    }
    Ok(None)
}

/// Read a big-endian segment length, `None` at end of stream.
fn read_length<R: Read>(reader: &mut PositionReader<R>) -> io::Result<Option<u16>> {
    let high = match reader.read_byte()? {
        Some(b) => b,
        None => return Ok(None),
    };
    let low = match reader.read_byte()? {
        Some(b) => b,
        None => return Ok(None),
    };
    Ok(Some(u16::from_be_bytes([high, low])))
}

/// Read a NUL-terminated Latin-1 name of at most `limit` bytes.
///
/// Returns the name and the number of bytes consumed (terminator included),
/// or `None` at end of stream.
fn read_name<R: Read>(
    reader: &mut PositionReader<R>,
    limit: u64,
) -> io::Result<Option<(String, u64)>> {
    let mut name = String::new();
    let mut consumed = 0u64;
    while consumed < limit {
        let byte = match reader.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        consumed += 1;
        if byte == 0 {
            break;
        }
        name.push(byte as char);
    }
    Ok(Some((name, consumed)))
}
