//! Photo-sphere (GPano) panorama queries.
//!
//! A panorama image may be a crop of a larger equirectangular sphere. The
//! GPano properties give the size of the full sphere image and the crop's
//! position in it, from which the texture rectangle in degrees follows.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::XmpError;

use super::document::{XmpDocument, XmpElement};
use super::reader::{extract_xmp, NS_GPANO};

/// Projection type accepted as a panorama.
const EQUIRECTANGULAR: &str = "equirectangular";

/// Smallest span from the center in each direction, in degrees.
const MIN_SPAN: f64 = 1.0;

// =============================================================================
// PanoDescription
// =============================================================================

/// GPano properties of an image, as written in the XMP packet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanoDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_panorama_viewer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_pano_width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_pano_height: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropped_area_left: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropped_area_top: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropped_area_width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropped_area_height: Option<String>,
}

impl PanoDescription {
    /// Read the GPano description of a document.
    ///
    /// Returns `None` without an `rdf:RDF` element or without an
    /// `rdf:Description` declaring the GPano namespace.
    pub fn from_document(document: &XmpDocument) -> Option<Self> {
        let description = document.find_rdf()?.find_description(NS_GPANO)?;
        let read = |name: &str| read_owned(description, name);

        Some(PanoDescription {
            use_panorama_viewer: read("UsePanoramaViewer"),
            projection_type: read("ProjectionType"),
            full_pano_width: read("FullPanoWidthPixels"),
            full_pano_height: read("FullPanoHeightPixels"),
            cropped_area_left: read("CroppedAreaLeftPixels"),
            cropped_area_top: read("CroppedAreaTopPixels"),
            cropped_area_width: read("CroppedAreaImageWidthPixels"),
            cropped_area_height: read("CroppedAreaImageHeightPixels"),
        })
    }

    /// Whether the image should be shown as an equirectangular panorama.
    ///
    /// At least one of the full width, full height and projection type must
    /// be present, the viewer must not be disabled with `"false"`, and a
    /// present projection type must be `"equirectangular"`.
    pub fn is_equirectangular(&self) -> bool {
        let declared = self.full_pano_width.is_some()
            || self.full_pano_height.is_some()
            || self.projection_type.is_some();
        let viewer_enabled = !self
            .use_panorama_viewer
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("false"));
        let equirectangular = self
            .projection_type
            .as_deref()
            .map_or(true, |projection| projection == EQUIRECTANGULAR);

        declared && viewer_enabled && equirectangular
    }

    /// Size of the cropped image as declared in the packet.
    pub fn cropped_size(&self) -> Option<(f64, f64)> {
        Some((
            parse_number(self.cropped_area_width.as_deref())?,
            parse_number(self.cropped_area_height.as_deref())?,
        ))
    }

    /// Texture rectangle of a `image_width` x `image_height` crop, in degrees.
    ///
    /// The full width defaults to the image width and the crop origin to
    /// (0, 0). Without a full height, or with one below half the full width,
    /// a 2:1 sphere is assumed and the crop is centered vertically.
    pub fn texture_rect(&self, image_width: f64, image_height: f64) -> PanoRect {
        let full_width =
            parse_number(self.full_pano_width.as_deref()).unwrap_or(image_width);
        if full_width.is_nan() || full_width <= 0.0 {
            debug!(full_width, "Unusable panorama width, using flat rectangle");
            return PanoRect::for_flat_image(image_width, image_height);
        }

        let left = parse_number(self.cropped_area_left.as_deref()).unwrap_or(0.0);
        let mut top = parse_number(self.cropped_area_top.as_deref()).unwrap_or(0.0);

        let half_width = full_width / 2.0;
        let full_height = match parse_number(self.full_pano_height.as_deref()) {
            None => {
                top += (half_width - image_height) / 2.0;
                half_width
            }
            Some(height) if height < half_width => {
                top += (half_width - height) / 2.0;
                half_width
            }
            Some(height) => height,
        };

        PanoRect {
            left: (360.0 * left / full_width - 180.0).min(-MIN_SPAN).max(-180.0),
            top: (180.0 * top / full_height - 90.0).min(-MIN_SPAN).max(-90.0),
            right: (360.0 * (left + image_width) / full_width - 180.0)
                .max(MIN_SPAN)
                .min(180.0),
            bottom: (180.0 * (top + image_height) / full_height - 90.0)
                .max(MIN_SPAN)
                .min(90.0),
        }
    }
}

fn read_owned(description: &XmpElement, name: &str) -> Option<String> {
    description.read_string(NS_GPANO, name).map(str::to_string)
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value?.trim().parse().ok()
}

// =============================================================================
// PanoRect
// =============================================================================

/// A rectangle on the sphere in degrees: longitude from left to right,
/// latitude from top to bottom, both with the image center at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanoRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PanoRect {
    /// Rectangle for an image without panorama description: the full
    /// longitude range, with the latitude span following the aspect ratio.
    pub fn for_flat_image(image_width: f64, image_height: f64) -> Self {
        let half_span = 180.0 * image_height / image_width;
        PanoRect {
            left: -180.0,
            top: (-half_span).max(-90.0),
            right: 180.0,
            bottom: half_span.min(90.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

// =============================================================================
// File Queries
// =============================================================================

/// Whether a JPEG file is marked as an equirectangular panorama.
///
/// # Errors
/// I/O errors and malformed XMP packets.
pub fn is_panorama<P: AsRef<Path>>(path: P) -> Result<bool, XmpError> {
    Ok(extract_xmp(path)?
        .as_ref()
        .and_then(PanoDescription::from_document)
        .is_some_and(|description| description.is_equirectangular()))
}

/// Texture rectangle of a JPEG file, falling back to
/// [`PanoRect::for_flat_image`] when it has no panorama description.
///
/// # Errors
/// I/O errors and malformed XMP packets.
pub fn panorama_rect<P: AsRef<Path>>(
    path: P,
    image_width: u32,
    image_height: u32,
) -> Result<PanoRect, XmpError> {
    let (width, height) = (image_width as f64, image_height as f64);
    let rect = extract_xmp(path)?
        .as_ref()
        .and_then(PanoDescription::from_document)
        .map(|description| description.texture_rect(width, height))
        .unwrap_or_else(|| PanoRect::for_flat_image(width, height));
    Ok(rect)
}
