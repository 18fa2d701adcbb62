//! XMP extraction from JPEG files and RDF lookups.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::XmpError;
use crate::format::detect::has_jpeg_extension;
use crate::format::jpeg::{scan_segments, Segment, SegmentAction, SCAN_BUFFER_SIZE};

use super::document::{XmpDocument, XmpElement, NS_XMLNS};

/// XMP packet namespace; also the name of the APP1 segment carrying it.
pub const NS_XAP: &str = "http://ns.adobe.com/xap/1.0/";

/// RDF syntax namespace.
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Google photo-sphere (GPano) namespace.
pub const NS_GPANO: &str = "http://ns.google.com/photos/1.0/panorama/";

// =============================================================================
// Extraction
// =============================================================================

/// Extract the XMP packet of a JPEG file.
///
/// Returns `None` when the file name is not `.jpg`/`.jpeg`, when no marker is
/// found, or when there is no XMP segment.
///
/// # Errors
/// I/O errors, and [`XmpError::Xml`] when the packet is not well-formed.
pub fn extract_xmp<P: AsRef<Path>>(path: P) -> Result<Option<XmpDocument>, XmpError> {
    let path = path.as_ref();
    if !has_jpeg_extension(path) {
        debug!(path = %path.display(), "Not a JPEG file name, no XMP");
        return Ok(None);
    }

    let file = File::open(path)?;
    read_xmp(BufReader::with_capacity(SCAN_BUFFER_SIZE, file))
}

/// Extract the XMP packet of a JPEG stream.
///
/// The first segment named [`NS_XAP`] is parsed and the scan stops there.
///
/// # Errors
/// Same as [`extract_xmp`].
pub fn read_xmp<R: Read>(reader: R) -> Result<Option<XmpDocument>, XmpError> {
    let mut document = None;
    let summary = scan_segments(reader, |segment| -> Result<SegmentAction, XmpError> {
        if segment.name() != NS_XAP {
            return Ok(SegmentAction::SKIP);
        }
        document = Some(parse_packet(segment)?);
        Ok(SegmentAction::STOP)
    })?;

    if summary.markers == 0 {
        debug!("No JPEG marker found, no XMP");
        return Ok(None);
    }
    Ok(document)
}

fn parse_packet<R: Read>(segment: &mut Segment<'_, R>) -> Result<XmpDocument, XmpError> {
    let mut payload = Vec::with_capacity(segment.length() as usize);
    segment.read_to_end(&mut payload)?;

    let text = String::from_utf8_lossy(&payload);
    // Some writers pad the segment with NULs after the packet.
    let text = text.trim_end_matches('\0');
    debug!(offset = segment.offset(), size = payload.len(), "Parsing XMP packet");
    XmpDocument::parse(text)
}

// =============================================================================
// RDF Lookups
// =============================================================================

impl XmpDocument {
    /// The first `rdf:RDF` element in document order.
    pub fn find_rdf(&self) -> Option<&XmpElement> {
        self.find_element(NS_RDF, "RDF")
    }
}

impl XmpElement {
    /// The first descendant `rdf:Description` that declares a prefix bound to
    /// `namespace`.
    pub fn find_description(&self, namespace: &str) -> Option<&XmpElement> {
        self.descendants()
            .filter(|element| element.is(NS_RDF, "Description"))
            .find(|element| {
                element.attributes().iter().any(|attr| {
                    attr.namespace.as_deref() == Some(NS_XMLNS)
                        && attr.prefix.is_some()
                        && attr.value == namespace
                })
            })
    }

    /// A property value: the text of the first descendant element with this
    /// name, else the attribute with this name. Empty values count as absent.
    pub fn read_string(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.find_descendant(namespace, local_name)
            .and_then(XmpElement::first_text)
            .or_else(|| self.attribute(namespace, local_name))
            .filter(|value| !value.is_empty())
    }

    /// A property value parsed as a number; `None` when absent or not numeric.
    pub fn read_float(&self, namespace: &str, local_name: &str) -> Option<f64> {
        self.read_string(namespace, local_name)?.trim().parse().ok()
    }
}
