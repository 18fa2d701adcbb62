//! Test utilities for integration tests.
//!
//! This module provides builders for synthetic EXIF blocks (TIFF structures
//! in either byte order, with nested Exif and GPS IFDs), XMP packets and the
//! JPEG files that carry them, plus helpers to write them to temp files.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Name of the XMP APP1 segment.
pub const XMP_NAME: &str = "http://ns.adobe.com/xap/1.0/";

// Field type codes
pub const BYTE: u16 = 1;
pub const ASCII: u16 = 2;
pub const SHORT: u16 = 3;
pub const LONG: u16 = 4;
pub const RATIONAL: u16 = 5;
pub const UNDEFINED: u16 = 7;
pub const SLONG: u16 = 9;
pub const SRATIONAL: u16 = 10;

// Pointer tags
pub const EXIF_IFD_POINTER: u16 = 0x8769;
pub const GPS_IFD_POINTER: u16 = 0x8825;

// =============================================================================
// Byte Order
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

impl ByteOrderType {
    fn marker(self) -> &'static [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => b"II",
            ByteOrderType::BigEndian => b"MM",
        }
    }

    fn u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }

    fn u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }
}

// =============================================================================
// IFD Builder
// =============================================================================

/// The value of one IFD entry.
#[derive(Clone, Debug)]
pub enum EntryValue {
    Bytes(Vec<u8>),
    Ascii(String),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    Rationals(Vec<(u32, u32)>),
    Undefined(Vec<u8>),
    SLongs(Vec<i32>),
    SRationals(Vec<(i32, i32)>),
    /// A raw entry, written as-is: field type, count, value/offset field
    Raw(u16, u32, u32),
}

impl EntryValue {
    /// Field type, count and encoded payload.
    fn encode(&self, order: ByteOrderType) -> (u16, u32, Vec<u8>) {
        let mut payload = Vec::new();
        let (field_type, count) = match self {
            EntryValue::Bytes(values) => {
                payload.extend_from_slice(values);
                (BYTE, values.len() as u32)
            }
            EntryValue::Ascii(text) => {
                payload.extend_from_slice(text.as_bytes());
                payload.push(0);
                (ASCII, payload.len() as u32)
            }
            EntryValue::Shorts(values) => {
                for v in values {
                    payload.extend_from_slice(&order.u16(*v));
                }
                (SHORT, values.len() as u32)
            }
            EntryValue::Longs(values) => {
                for v in values {
                    payload.extend_from_slice(&order.u32(*v));
                }
                (LONG, values.len() as u32)
            }
            EntryValue::Rationals(values) => {
                for (num, den) in values {
                    payload.extend_from_slice(&order.u32(*num));
                    payload.extend_from_slice(&order.u32(*den));
                }
                (RATIONAL, values.len() as u32)
            }
            EntryValue::Undefined(values) => {
                payload.extend_from_slice(values);
                (UNDEFINED, values.len() as u32)
            }
            EntryValue::SLongs(values) => {
                for v in values {
                    payload.extend_from_slice(&order.u32(*v as u32));
                }
                (SLONG, values.len() as u32)
            }
            EntryValue::SRationals(values) => {
                for (num, den) in values {
                    payload.extend_from_slice(&order.u32(*num as u32));
                    payload.extend_from_slice(&order.u32(*den as u32));
                }
                (SRATIONAL, values.len() as u32)
            }
            EntryValue::Raw(field_type, count, value) => {
                return (*field_type, *count, order.u32(*value).to_vec());
            }
        };
        (field_type, count, payload)
    }
}

/// Builder for one IFD.
#[derive(Clone, Debug, Default)]
pub struct IfdBuilder {
    entries: Vec<(u16, EntryValue)>,
}

impl IfdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag entry.
    pub fn entry(mut self, tag: u16, value: EntryValue) -> Self {
        self.entries.push((tag, value));
        self
    }

    pub fn ascii(self, tag: u16, text: &str) -> Self {
        self.entry(tag, EntryValue::Ascii(text.to_string()))
    }

    pub fn short(self, tag: u16, value: u16) -> Self {
        self.entry(tag, EntryValue::Shorts(vec![value]))
    }

    pub fn long(self, tag: u16, value: u32) -> Self {
        self.entry(tag, EntryValue::Longs(vec![value]))
    }

    pub fn rational(self, tag: u16, num: u32, den: u32) -> Self {
        self.entry(tag, EntryValue::Rationals(vec![(num, den)]))
    }

    pub fn rationals(self, tag: u16, values: &[(u32, u32)]) -> Self {
        self.entry(tag, EntryValue::Rationals(values.to_vec()))
    }

    pub fn srational(self, tag: u16, num: i32, den: i32) -> Self {
        self.entry(tag, EntryValue::SRationals(vec![(num, den)]))
    }

    pub fn undefined(self, tag: u16, bytes: &[u8]) -> Self {
        self.entry(tag, EntryValue::Undefined(bytes.to_vec()))
    }

    /// Size of the IFD with its out-of-line data.
    fn size(&self, order: ByteOrderType) -> usize {
        let data: usize = self
            .entries
            .iter()
            .map(|(_, value)| {
                let (_, _, payload) = value.encode(order);
                if payload.len() > 4 {
                    padded(payload.len())
                } else {
                    0
                }
            })
            .sum();
        2 + self.entries.len() * 12 + 4 + data
    }

    /// Write the IFD at the end of `out`, followed by its out-of-line data.
    ///
    /// Offsets are relative to the start of `out`, which is the TIFF header.
    fn write_to(&self, out: &mut Vec<u8>, order: ByteOrderType) {
        let start = out.len();
        let mut data_offset = start + 2 + self.entries.len() * 12 + 4;
        let mut data = Vec::new();

        out.extend_from_slice(&order.u16(self.entries.len() as u16));
        for (tag, value) in &self.entries {
            let (field_type, count, payload) = value.encode(order);
            out.extend_from_slice(&order.u16(*tag));
            out.extend_from_slice(&order.u16(field_type));
            out.extend_from_slice(&order.u32(count));

            if payload.len() <= 4 || matches!(value, EntryValue::Raw(..)) {
                let mut inline = [0u8; 4];
                inline[..payload.len()].copy_from_slice(&payload);
                out.extend_from_slice(&inline);
            } else {
                out.extend_from_slice(&order.u32(data_offset as u32));
                data.extend_from_slice(&payload);
                data.resize(padded(data.len()), 0);
                data_offset += padded(payload.len());
            }
        }
        // No next IFD
        out.extend_from_slice(&order.u32(0));
        out.extend_from_slice(&data);
    }
}

fn padded(len: usize) -> usize {
    len + len % 2
}

// =============================================================================
// TIFF Builder
// =============================================================================

/// Builder for the TIFF structure of an EXIF block.
///
/// IFD0 comes first, followed by the Exif IFD and the GPS IFD when present.
/// Their pointer entries are appended to IFD0.
pub struct TiffBuilder {
    byte_order: ByteOrderType,
    magic: Option<[u8; 2]>,
    version: u16,
    ifd0: IfdBuilder,
    exif: Option<IfdBuilder>,
    gps: Option<IfdBuilder>,
    exif_pointer_override: Option<u32>,
}

impl TiffBuilder {
    pub fn new() -> Self {
        Self {
            byte_order: ByteOrderType::LittleEndian,
            magic: None,
            version: 42,
            ifd0: IfdBuilder::new(),
            exif: None,
            gps: None,
            exif_pointer_override: None,
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrderType) -> Self {
        self.byte_order = order;
        self
    }

    /// Write these two bytes instead of the byte order marker.
    pub fn with_magic(mut self, magic: [u8; 2]) -> Self {
        self.magic = Some(magic);
        self
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn ifd0(mut self, ifd: IfdBuilder) -> Self {
        self.ifd0 = ifd;
        self
    }

    pub fn exif_ifd(mut self, ifd: IfdBuilder) -> Self {
        self.exif = Some(ifd);
        self
    }

    pub fn gps_ifd(mut self, ifd: IfdBuilder) -> Self {
        self.gps = Some(ifd);
        self
    }

    /// Point the Exif IFD pointer at this offset instead of the Exif IFD.
    pub fn with_exif_pointer(mut self, offset: u32) -> Self {
        self.exif_pointer_override = Some(offset);
        self
    }

    /// Build the TIFF data.
    pub fn build(self) -> Vec<u8> {
        let order = self.byte_order;

        // Pointer entries are placeholders until the layout is known
        let mut ifd0 = self.ifd0.clone();
        if self.exif.is_some() || self.exif_pointer_override.is_some() {
            ifd0 = ifd0.long(EXIF_IFD_POINTER, 0);
        }
        if self.gps.is_some() {
            ifd0 = ifd0.long(GPS_IFD_POINTER, 0);
        }

        let ifd0_offset = 8usize;
        let exif_offset = ifd0_offset + ifd0.size(order);
        let exif_size = self.exif.as_ref().map_or(0, |ifd| ifd.size(order));
        let gps_offset = exif_offset + exif_size;

        for (tag, value) in ifd0.entries.iter_mut() {
            match *tag {
                EXIF_IFD_POINTER => {
                    let offset = self.exif_pointer_override.unwrap_or(exif_offset as u32);
                    *value = EntryValue::Longs(vec![offset]);
                }
                GPS_IFD_POINTER => *value = EntryValue::Longs(vec![gps_offset as u32]),
                _ => {}
            }
        }

        let mut out = Vec::new();
        out.extend_from_slice(&self.magic.unwrap_or(*order.marker()));
        out.extend_from_slice(&order.u16(self.version));
        out.extend_from_slice(&order.u32(ifd0_offset as u32));

        ifd0.write_to(&mut out, order);
        if let Some(exif) = &self.exif {
            exif.write_to(&mut out, order);
        }
        if let Some(gps) = &self.gps {
            gps.write_to(&mut out, order);
        }
        out
    }
}

impl Default for TiffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// JPEG Builder
// =============================================================================

/// Builder for JPEG files made of marker segments.
///
/// Image data is fake: the scan segment carries a few entropy-coded bytes
/// with stuffed `0xFF 0x00` pairs and restart markers.
pub struct JpegBuilder {
    data: Vec<u8>,
}

impl JpegBuilder {
    /// Start with the SOI marker.
    pub fn new() -> Self {
        Self {
            data: vec![0xFF, 0xD8],
        }
    }

    /// Append a segment with a length field.
    pub fn segment(mut self, marker: u8, payload: &[u8]) -> Self {
        let length = (payload.len() + 2) as u16;
        self.data.extend_from_slice(&[0xFF, marker]);
        self.data.extend_from_slice(&length.to_be_bytes());
        self.data.extend_from_slice(payload);
        self
    }

    /// Append an APP1 segment with a NUL-terminated name.
    pub fn app1(self, name: &str, payload: &[u8]) -> Self {
        let mut body = name.as_bytes().to_vec();
        body.push(0);
        body.extend_from_slice(payload);
        self.segment(0xE1, &body)
    }

    /// Append a JFIF APP0 segment.
    pub fn jfif(self) -> Self {
        self.segment(0xE0, b"JFIF\0\x01\x02\x00\x00\x01\x00\x01\x00\x00")
    }

    /// Append an EXIF segment wrapping a TIFF structure.
    pub fn exif(self, tiff: &[u8]) -> Self {
        let mut payload = vec![0u8];
        payload.extend_from_slice(tiff);
        self.app1("Exif", &payload)
    }

    /// Append an XMP segment.
    pub fn xmp(self, packet: &str) -> Self {
        self.app1(XMP_NAME, packet.as_bytes())
    }

    /// Append quantization tables, a restart interval and a frame header.
    pub fn tables(self) -> Self {
        self.segment(0xDB, &[0u8; 65])
            .raw(&[0xFF, 0xDD, 0x00, 0x04, 0x00, 0x10])
            .segment(0xC0, &[8, 0, 16, 0, 16, 1, 1, 0x11, 0])
    }

    /// Append a scan with entropy-coded data.
    pub fn scan(self) -> Self {
        self.segment(0xDA, &[1, 1, 0, 0, 63, 0])
            .raw(&[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56, 0xFF, 0xFF, 0x00, 0x78])
    }

    /// Append raw bytes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Finish with the EOI marker.
    pub fn build(mut self) -> Vec<u8> {
        self.data.extend_from_slice(&[0xFF, 0xD9]);
        self.data
    }

    /// Finish without the EOI marker.
    pub fn build_unterminated(self) -> Vec<u8> {
        self.data
    }
}

impl Default for JpegBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// XMP Packets
// =============================================================================

/// A complete XMP packet whose GPano description carries `properties` as
/// attributes.
pub fn gpano_xmp(properties: &[(&str, &str)]) -> String {
    let attributes: String = properties
        .iter()
        .map(|(name, value)| format!("\n      GPano:{}=\"{}\"", name, value))
        .collect();
    format!(
        r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="Test">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
      xmlns:xmp="http://ns.adobe.com/xap/1.0/"
      xmp:CreatorTool="Test"/>
    <rdf:Description rdf:about=""
      xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"{}/>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#,
        attributes
    )
}

/// A complete XMP packet whose GPano description carries `properties` as
/// child elements.
pub fn gpano_xmp_elements(properties: &[(&str, &str)]) -> String {
    let elements: String = properties
        .iter()
        .map(|(name, value)| format!("\n      <GPano:{0}>{1}</GPano:{0}>", name, value))
        .collect();
    format!(
        r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:GPano="http://ns.google.com/photos/1.0/panorama/">{}
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#,
        elements
    )
}

// =============================================================================
// Temp Files
// =============================================================================

/// Write `data` to `name` inside `dir`.
pub fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("write test file");
    path
}

/// Write `data` as `image.jpg` in a fresh temp dir.
///
/// The dir must be kept alive for as long as the file is used.
pub fn temp_jpeg(data: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(&dir, "image.jpg", data);
    (dir, path)
}

/// A typical camera EXIF block: IFD0 with make/model/orientation, an Exif
/// IFD with exposure settings and pixel size, and a GPS IFD.
pub fn camera_tiff(order: ByteOrderType) -> Vec<u8> {
    TiffBuilder::new()
        .with_byte_order(order)
        .ifd0(
            IfdBuilder::new()
                .ascii(0x010F, "Acme")
                .ascii(0x0110, "Model X100")
                .short(0x0112, 6)
                .rational(0x011A, 72, 1)
                .short(0x0128, 2),
        )
        .exif_ifd(
            IfdBuilder::new()
                .rational(0x829A, 1, 250)
                .rational(0x829D, 28, 10)
                .short(0x8827, 200)
                .undefined(0x9000, b"0231")
                .srational(0x9201, 8, 1)
                .rational(0x9202, 4, 1)
                .short(0x9209, 0x10)
                .undefined(0x9286, b"ASCII\0\0\0Holiday")
                .long(0xA002, 4000)
                .long(0xA003, 3000),
        )
        .gps_ifd(
            IfdBuilder::new()
                .ascii(0x0001, "S")
                .rationals(0x0002, &[(33, 1), (51, 1), (3600, 100)])
                .ascii(0x0003, "E")
                .rationals(0x0004, &[(151, 1), (12, 1), (3600, 100)])
                .entry(0x0005, EntryValue::Bytes(vec![0]))
                .rational(0x0006, 585, 10)
                .rationals(0x0007, &[(14, 1), (30, 1), (5, 1)]),
        )
        .build()
}
