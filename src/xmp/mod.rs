//! XMP metadata extraction.
//!
//! XMP packets are stored in an APP1 segment named after the XMP namespace,
//! `http://ns.adobe.com/xap/1.0/`, as UTF-8 XML. The packet is parsed into a
//! small namespace-aware tree which supports the RDF lookups needed for
//! panorama detection: the `rdf:RDF` element, the `rdf:Description` that
//! declares a given namespace, and property values read from child elements
//! or attributes.

mod document;
mod pano;
mod reader;

pub use document::{Descendants, XmpAttribute, XmpDocument, XmpElement, XmpNode, NS_XMLNS};
pub use pano::{is_panorama, panorama_rect, PanoDescription, PanoRect};
pub use reader::{extract_xmp, read_xmp, NS_GPANO, NS_RDF, NS_XAP};
