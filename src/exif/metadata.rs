//! Extracted EXIF metadata.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

use crate::format::tiff::TagValue;

use super::catalog::ExifTag;

// =============================================================================
// ExifMetadata
// =============================================================================

/// Decoded tags of one file, ordered by [`ExifTag::sort_order`].
///
/// Only tags with a display label are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifMetadata {
    entries: BTreeMap<ExifTag, TagValue>,
}

impl ExifMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, tag: ExifTag, value: TagValue) {
        self.entries.insert(tag, value);
    }

    pub fn get(&self, tag: ExifTag) -> Option<&TagValue> {
        self.entries.get(&tag)
    }

    pub fn contains(&self, tag: ExifTag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over tags in display order.
    pub fn iter(&self) -> btree_map::Iter<'_, ExifTag, TagValue> {
        self.entries.iter()
    }

    /// GPS position in signed decimal degrees.
    ///
    /// Requires both the latitude and longitude tags. A `"S"` latitude
    /// reference or a `"W"` longitude reference negates the coordinate.
    pub fn gps_position(&self) -> Option<GpsPosition> {
        let longitude = self.get(ExifTag::GpsLongitude)?.as_degree()?;
        let latitude = self.get(ExifTag::GpsLatitude)?.as_degree()?;

        let mut longitude = longitude.decimal();
        let mut latitude = latitude.decimal();
        if self.reference(ExifTag::GpsLongitudeRef) == Some("W") {
            longitude = -longitude;
        }
        if self.reference(ExifTag::GpsLatitudeRef) == Some("S") {
            latitude = -latitude;
        }

        Some(GpsPosition {
            longitude,
            latitude,
        })
    }

    fn reference(&self, tag: ExifTag) -> Option<&str> {
        self.get(tag).and_then(TagValue::as_text)
    }

    /// The orientation tag, if present and valid.
    pub fn orientation(&self) -> Option<Orientation> {
        self.get(ExifTag::Orientation)
            .and_then(TagValue::as_i64)
            .and_then(Orientation::from_code)
    }

    /// Pixel dimensions from the Exif sub-IFD, as stored (before rotation).
    pub fn pixel_dimensions(&self) -> Option<(u32, u32)> {
        let width = self.get(ExifTag::ExifImageWidth)?.as_i64()?;
        let height = self.get(ExifTag::ExifImageHeight)?.as_i64()?;
        Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
    }
}

impl<'a> IntoIterator for &'a ExifMetadata {
    type Item = (&'a ExifTag, &'a TagValue);
    type IntoIter = btree_map::Iter<'a, ExifTag, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// GpsPosition
// =============================================================================

/// A GPS position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpsPosition {
    /// East positive, west negative
    pub longitude: f64,

    /// North positive, south negative
    pub latitude: f64,
}

// =============================================================================
// Orientation
// =============================================================================

/// EXIF orientation (tag 0x0112).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal = 1,
    MirrorHorizontal = 2,
    Rotate180 = 3,
    MirrorVertical = 4,
    MirrorHorizontalRotate270 = 5,
    Rotate90 = 6,
    MirrorHorizontalRotate90 = 7,
    Rotate270 = 8,
}

impl Orientation {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::MirrorHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::MirrorVertical),
            5 => Some(Orientation::MirrorHorizontalRotate270),
            6 => Some(Orientation::Rotate90),
            7 => Some(Orientation::MirrorHorizontalRotate90),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// Whether displaying the image swaps its width and height.
    pub fn swaps_dimensions(self) -> bool {
        self as u8 >= 5
    }
}
