//! EXIF extraction from JPEG files.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ExifError, TiffError};
use crate::format::detect::has_jpeg_extension;
use crate::format::jpeg::{scan_segments, SegmentAction, SCAN_BUFFER_SIZE};
use crate::format::tiff::{IfdKind, TiffHeader, TIFF_HEADER_SIZE};

use super::catalog::ExifTag;
use super::metadata::{ExifMetadata, Orientation};
use super::walker::IfdWalker;

/// Name of the APP1 segment carrying EXIF data.
pub const EXIF_SEGMENT_NAME: &str = "Exif";

/// Padding byte between the segment name's terminator and the TIFF header.
const PADDING_SIZE: usize = 1;

/// Tags needed to compute a display size.
const ORIENTATION_AND_SIZE: &[ExifTag] = &[
    ExifTag::Orientation,
    ExifTag::ExifImageWidth,
    ExifTag::ExifImageHeight,
];

/// Extract EXIF metadata from a JPEG file.
///
/// Files whose name does not end in `.jpg` or `.jpeg` are not opened and
/// yield empty metadata, as do JPEG files without an EXIF segment.
///
/// # Arguments
/// * `path` - File to read
/// * `filter` - Tags to extract; empty extracts every labelled tag
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or if the EXIF
/// segment carries an invalid TIFF header.
pub fn extract_exif<P: AsRef<Path>>(
    path: P,
    filter: &[ExifTag],
) -> Result<ExifMetadata, ExifError> {
    let path = path.as_ref();
    if !has_jpeg_extension(path) {
        debug!(path = %path.display(), "Not a JPEG file name, no EXIF");
        return Ok(ExifMetadata::new());
    }

    let mut file = File::open(path)?;
    read_exif(&mut file, filter)
}

/// Extract EXIF metadata from a seekable JPEG stream.
///
/// The stream is rewound, scanned up to the first `Exif` segment, then the
/// IFDs are walked with random access. Errors during the walk end it early:
/// the tags decoded so far are returned and the error is logged.
///
/// # Errors
/// Read errors during the scan, and an invalid TIFF byte order or version.
pub fn read_exif<R: Read + Seek>(
    source: &mut R,
    filter: &[ExifTag],
) -> Result<ExifMetadata, ExifError> {
    source.seek(SeekFrom::Start(0))?;

    let mut block: Option<(TiffHeader, u64)> = None;
    let summary = scan_segments(
        BufReader::with_capacity(SCAN_BUFFER_SIZE, &mut *source),
        |segment| -> Result<SegmentAction, ExifError> {
            if segment.name() != EXIF_SEGMENT_NAME {
                return Ok(SegmentAction::SKIP);
            }

            let mut raw = [0u8; PADDING_SIZE + TIFF_HEADER_SIZE];
            let actual = read_up_to(segment, &mut raw)?;
            if actual < raw.len() {
                return Err(TiffError::FileTooSmall {
                    required: raw.len() as u64,
                    actual: actual as u64,
                }
                .into());
            }

            let header = TiffHeader::parse(&raw[PADDING_SIZE..])?;
            block = Some((header, segment.offset() + PADDING_SIZE as u64));
            Ok(SegmentAction::STOP)
        },
    )?;

    let mut metadata = ExifMetadata::new();
    let Some((header, tiff_base)) = block else {
        debug!(markers = summary.markers, "No EXIF segment found");
        return Ok(metadata);
    };

    let mut walker = IfdWalker::new(source, tiff_base, header.byte_order, filter);
    if let Err(err) = walker.walk(header.first_ifd_offset, IfdKind::Standard, &mut metadata) {
        warn!(
            error = %err,
            tags = metadata.len(),
            "EXIF walk ended early, returning partial metadata"
        );
    }

    Ok(metadata)
}

/// Read the orientation and the displayed pixel size of a JPEG file.
///
/// The size comes from the Exif sub-IFD and has its width and height
/// swapped when the orientation rotates the image by 90 degrees.
///
/// # Errors
/// Same as [`extract_exif`].
pub fn read_orientation_and_size<P: AsRef<Path>>(
    path: P,
) -> Result<(Option<Orientation>, Option<(u32, u32)>), ExifError> {
    let metadata = extract_exif(path, ORIENTATION_AND_SIZE)?;
    let orientation = metadata.orientation();
    let size = metadata.pixel_dimensions().map(|(width, height)| {
        if orientation.is_some_and(Orientation::swaps_dimensions) {
            (height, width)
        } else {
            (width, height)
        }
    });
    Ok((orientation, size))
}

/// Fill `buf` as far as the reader allows, returning the number of bytes read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
