//! EXIF extraction integration tests.
//!
//! Tests verify:
//! - Little-endian and big-endian blocks decode to the same metadata
//! - Nested Exif and GPS IFDs are followed
//! - Tag filters, GPS position, orientation and pixel size
//! - Header failures are errors; damaged IFDs yield partial metadata

use std::fs::File;

use jpeg_meta::exif::{extract_exif, read_exif, read_orientation_and_size, ExifTag, Orientation};
use jpeg_meta::{ExifError, TagValue, TiffError};

use super::test_utils::{
    camera_tiff, temp_jpeg, write_file, ByteOrderType, EntryValue, IfdBuilder, JpegBuilder,
    TiffBuilder, ASCII, RATIONAL,
};

fn camera_jpeg(order: ByteOrderType) -> Vec<u8> {
    JpegBuilder::new()
        .jfif()
        .exif(&camera_tiff(order))
        .tables()
        .scan()
        .build()
}

// =============================================================================
// Byte Order Tests
// =============================================================================

#[test]
fn test_both_byte_orders_decode_identically() {
    let (_le_dir, le_path) = temp_jpeg(&camera_jpeg(ByteOrderType::LittleEndian));
    let (_be_dir, be_path) = temp_jpeg(&camera_jpeg(ByteOrderType::BigEndian));

    let little = extract_exif(&le_path, &[]).unwrap();
    let big = extract_exif(&be_path, &[]).unwrap();

    assert!(!little.is_empty());
    assert_eq!(little, big);
}

#[test]
fn test_invalid_byte_order_is_error() {
    let tiff = TiffBuilder::new()
        .with_magic([0x00, 0x00])
        .ifd0(IfdBuilder::new().ascii(0x010F, "Acme"))
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let result = extract_exif(&path, &[]);
    assert!(matches!(
        result,
        Err(ExifError::Tiff(TiffError::InvalidMagic(0x0000)))
    ));
}

#[test]
fn test_old_version_is_error() {
    let tiff = TiffBuilder::new()
        .with_byte_order(ByteOrderType::BigEndian)
        .with_version(41)
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let result = extract_exif(&path, &[]);
    assert!(matches!(
        result,
        Err(ExifError::Tiff(TiffError::InvalidVersion(41)))
    ));
}

// =============================================================================
// Decoded Values
// =============================================================================

#[test]
fn test_camera_values() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::LittleEndian));
    let metadata = extract_exif(&path, &[]).unwrap();

    let text = |tag: ExifTag| metadata.get(tag).and_then(TagValue::as_text);
    let shown = |tag: ExifTag| tag.display_value(metadata.get(tag).unwrap());

    // IFD0
    assert_eq!(text(ExifTag::Make), Some("Acme"));
    assert_eq!(text(ExifTag::Model), Some("Model X100"));
    assert_eq!(metadata.get(ExifTag::Orientation), Some(&TagValue::Integer(6)));
    assert_eq!(metadata.get(ExifTag::XResolution), Some(&TagValue::Double(72.0)));

    // Exif sub-IFD
    assert_eq!(shown(ExifTag::ExposureTime), "1 / 250 s");
    assert_eq!(shown(ExifTag::FNumber), "F 2.8");
    assert_eq!(shown(ExifTag::ShutterSpeed), "1 / 256 s");
    assert_eq!(shown(ExifTag::Aperture), "F 4");
    assert_eq!(text(ExifTag::ExifVersion), Some("0231"));
    assert_eq!(text(ExifTag::UserComment), Some("Holiday"));
    assert_eq!(metadata.pixel_dimensions(), Some((4000, 3000)));

    // GPS sub-IFD
    assert_eq!(shown(ExifTag::GpsLatitudeRef), "South");
    assert_eq!(shown(ExifTag::GpsAltitude), "58.5 m");
    assert_eq!(
        metadata.get(ExifTag::GpsTimestamp),
        Some(&TagValue::Timestamp("14:30:5".to_string()))
    );
    assert!(shown(ExifTag::GpsLatitude).starts_with("33\u{00B0} 51' 36\""));
}

#[test]
fn test_pointer_tags_are_not_stored() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::LittleEndian));
    let metadata = extract_exif(&path, &[]).unwrap();

    assert!(!metadata.contains(ExifTag::ExifOffset));
    assert!(!metadata.contains(ExifTag::ExifGps));
    assert!(metadata.iter().all(|(tag, _)| tag.label().is_some()));
}

#[test]
fn test_display_order_puts_gps_first() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::BigEndian));
    let metadata = extract_exif(&path, &[]).unwrap();

    let tags: Vec<ExifTag> = metadata.iter().map(|(tag, _)| *tag).collect();
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted);
    assert_eq!(tags[0], ExifTag::GpsLatitudeRef);
}

#[test]
fn test_unknown_tags_are_skipped() {
    let tiff = TiffBuilder::new()
        .ifd0(
            IfdBuilder::new()
                .ascii(0x010F, "Acme")
                .short(0xC4A5, 7)
                .ascii(0xFEED, "private"),
        )
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let metadata = extract_exif(&path, &[]).unwrap();
    assert_eq!(metadata.len(), 1);
    assert!(metadata.contains(ExifTag::Make));
}

// =============================================================================
// GPS Position
// =============================================================================

#[test]
fn test_gps_position_south_east() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::LittleEndian));
    let position = extract_exif(&path, &[]).unwrap().gps_position().unwrap();

    assert!((position.latitude + 33.86).abs() < 1e-9);
    assert!((position.longitude - 151.21).abs() < 1e-9);
}

#[test]
fn test_gps_position_requires_coordinates() {
    let tiff = TiffBuilder::new()
        .gps_ifd(IfdBuilder::new().ascii(0x0001, "N").ascii(0x0003, "W"))
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let metadata = extract_exif(&path, &[]).unwrap();
    assert!(metadata.contains(ExifTag::GpsLatitudeRef));
    assert_eq!(metadata.gps_position(), None);
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn test_filter_reaches_nested_ifds() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::BigEndian));
    let metadata = extract_exif(
        &path,
        &[ExifTag::Model, ExifTag::ExifImageWidth, ExifTag::GpsAltitude],
    )
    .unwrap();

    let tags: Vec<ExifTag> = metadata.iter().map(|(tag, _)| *tag).collect();
    assert_eq!(
        tags,
        vec![ExifTag::GpsAltitude, ExifTag::Model, ExifTag::ExifImageWidth]
    );
}

#[test]
fn test_orientation_and_size_swaps_rotated_dimensions() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::LittleEndian));
    let (orientation, size) = read_orientation_and_size(&path).unwrap();

    assert_eq!(orientation, Some(Orientation::Rotate90));
    assert_eq!(size, Some((3000, 4000)));
}

#[test]
fn test_orientation_and_size_unrotated() {
    let tiff = TiffBuilder::new()
        .ifd0(IfdBuilder::new().short(0x0112, 1))
        .exif_ifd(IfdBuilder::new().short(0xA002, 640).short(0xA003, 480))
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let (orientation, size) = read_orientation_and_size(&path).unwrap();
    assert_eq!(orientation, Some(Orientation::Normal));
    assert_eq!(size, Some((640, 480)));
}

// =============================================================================
// Absent or Damaged Data
// =============================================================================

#[test]
fn test_no_exif_segment() {
    let data = JpegBuilder::new().jfif().tables().scan().build();
    let (_dir, path) = temp_jpeg(&data);

    assert!(extract_exif(&path, &[]).unwrap().is_empty());
}

#[test]
fn test_non_jpeg_extension_is_not_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "image.png", &camera_jpeg(ByteOrderType::LittleEndian));

    assert!(extract_exif(&path, &[]).unwrap().is_empty());
}

#[test]
fn test_uppercase_extension_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "IMG_0001.JPEG", &camera_jpeg(ByteOrderType::LittleEndian));

    assert!(extract_exif(&path, &[]).unwrap().contains(ExifTag::Make));
}

#[test]
fn test_out_of_range_value_keeps_earlier_tags() {
    // Model points far past the end of the file
    let tiff = TiffBuilder::new()
        .ifd0(
            IfdBuilder::new()
                .ascii(0x010F, "Acme")
                .entry(0x0110, EntryValue::Raw(ASCII, 32, 0x00FF_0000))
                .ascii(0x0131, "Editor"),
        )
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let metadata = extract_exif(&path, &[]).unwrap();
    assert!(metadata.contains(ExifTag::Make));
    assert!(!metadata.contains(ExifTag::Model));
    assert!(!metadata.contains(ExifTag::Software));
}

#[test]
fn test_oversized_value_keeps_earlier_tags() {
    let tiff = TiffBuilder::new()
        .ifd0(
            IfdBuilder::new()
                .ascii(0x010F, "Acme")
                .entry(0x011A, EntryValue::Raw(RATIONAL, 1_000_000, 8)),
        )
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let metadata = extract_exif(&path, &[]).unwrap();
    assert_eq!(metadata.len(), 1);
}

#[test]
fn test_self_referencing_exif_pointer_terminates() {
    // The Exif pointer leads back to IFD0
    let tiff = TiffBuilder::new()
        .ifd0(IfdBuilder::new().ascii(0x010F, "Acme"))
        .with_exif_pointer(8)
        .build();
    let (_dir, path) = temp_jpeg(&JpegBuilder::new().exif(&tiff).build());

    let metadata = extract_exif(&path, &[]).unwrap();
    assert_eq!(metadata.len(), 1);
}

#[test]
fn test_first_exif_segment_wins() {
    let first = TiffBuilder::new()
        .ifd0(IfdBuilder::new().ascii(0x010F, "First"))
        .build();
    let second = TiffBuilder::new()
        .ifd0(IfdBuilder::new().ascii(0x010F, "Second"))
        .build();
    let data = JpegBuilder::new().exif(&first).exif(&second).build();
    let (_dir, path) = temp_jpeg(&data);

    let metadata = extract_exif(&path, &[]).unwrap();
    assert_eq!(
        metadata.get(ExifTag::Make).and_then(TagValue::as_text),
        Some("First")
    );
}

#[test]
fn test_read_exif_from_open_file() {
    let (_dir, path) = temp_jpeg(&camera_jpeg(ByteOrderType::BigEndian));
    let mut file = File::open(&path).unwrap();

    let metadata = read_exif(&mut file, &[ExifTag::Make]).unwrap();
    assert_eq!(metadata.len(), 1);

    // The same handle can be read again
    let again = read_exif(&mut file, &[ExifTag::Make]).unwrap();
    assert_eq!(metadata, again);
}
