//! Value label tables for enumerated EXIF tags.
//!
//! Each table maps a decoded value to its display text. Most are keyed by
//! integer codes; a few GPS reference tags and the security classification
//! are keyed by single-letter strings. [`CODING_METHODS`] is keyed by bit
//! position rather than value.

/// A value label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLabels {
    /// Integer-keyed labels (or bit positions for bit-flag tags)
    Int(&'static [(i64, &'static str)]),

    /// Text-keyed labels
    Text(&'static [(&'static str, &'static str)]),
}

impl ValueLabels {
    /// Label for an integer value.
    pub fn by_int(&self, value: i64) -> Option<&'static str> {
        match self {
            ValueLabels::Int(entries) => entries
                .iter()
                .find(|(code, _)| *code == value)
                .map(|(_, label)| *label),
            ValueLabels::Text(_) => None,
        }
    }

    /// Label for a text value.
    pub fn by_text(&self, value: &str) -> Option<&'static str> {
        match self {
            ValueLabels::Text(entries) => entries
                .iter()
                .find(|(code, _)| *code == value)
                .map(|(_, label)| *label),
            ValueLabels::Int(_) => None,
        }
    }
}

// =============================================================================
// Image Structure
// =============================================================================

pub const SUBFILE_TYPE: ValueLabels = ValueLabels::Int(&[
    (0x0, "Full-resolution image"),
    (0x1, "Reduced-resolution image"),
    (0x2, "Single page of multi-page image"),
    (0x3, "Single page of multi-page reduced-resolution image"),
    (0x4, "Transparency mask"),
    (0x5, "Transparency mask of reduced-resolution image"),
    (0x6, "Transparency mask of multi-page image"),
    (0x7, "Transparency mask of reduced-resolution multi-page image"),
    (0x8, "Depth map"),
    (0x9, "Depth map of reduced-resolution image"),
    (0x10, "Enhanced image data"),
    (0x10001, "Alternate reduced-resolution image"),
    (0x10004, "Semantic mask"),
    (0xFFFF_FFFF, "Invalid"),
]);

pub const COMPRESSION: ValueLabels = ValueLabels::Int(&[
    (1, "Uncompressed"),
    (2, "CCITT 1D"),
    (3, "T4/Group 3 Fax"),
    (4, "T6/Group 4 Fax"),
    (5, "LZW"),
    (6, "JPEG (old-style)"),
    (7, "JPEG"),
    (8, "Adobe Deflate"),
    (9, "JBIG B&W"),
    (10, "JBIG Color"),
    (99, "JPEG"),
]);

pub const PHOTOMETRIC_INTERPRETATION: ValueLabels = ValueLabels::Int(&[
    (0, "WhiteIsZero"),
    (1, "BlackIsZero"),
    (2, "RGB"),
    (3, "RGB Palette"),
    (4, "Transparency mask"),
    (5, "CMYK"),
    (6, "YCbCr"),
    (8, "CIELab"),
    (9, "ICCLab"),
    (10, "ITULab"),
    (32803, "Color Filter Array"),
    (32844, "Pixar LogL"),
    (32845, "Pixar LogLuv"),
    (32892, "Sequential Color Filter"),
    (34892, "Linear Raw"),
    (51177, "Depth map"),
    (52527, "Semantic mask"),
]);

pub const THRESHOLDING: ValueLabels = ValueLabels::Int(&[
    (1, "No dithering or halftoning"),
    (2, "Ordered dither or halftone"),
    (3, "Randomized dither"),
]);

pub const FILL_ORDER: ValueLabels = ValueLabels::Int(&[(1, "Normal"), (2, "Reversed")]);

pub const ORIENTATION: ValueLabels = ValueLabels::Int(&[
    (1, "Horizontal (normal)"),
    (2, "Mirror horizontal"),
    (3, "Rotate 180"),
    (4, "Mirror vertical"),
    (5, "Mirror horizontal and rotate 270 CW"),
    (6, "Rotate 90 CW"),
    (7, "Mirror horizontal and rotate 90 CW"),
    (8, "Rotate 270 CW"),
]);

pub const GRAY_RESPONSE_UNIT: ValueLabels = ValueLabels::Int(&[
    (1, "0.1"),
    (2, "0.001"),
    (3, "0.0001"),
    (4, "1e-05"),
    (5, "1e-06"),
]);

pub const RESOLUTION_UNIT: ValueLabels =
    ValueLabels::Int(&[(1, "None"), (2, "inches"), (3, "cm")]);

pub const PLANAR_CONFIGURATION: ValueLabels = ValueLabels::Int(&[(1, "Chunky"), (2, "Planar")]);

/// Bit positions, not values.
pub const CODING_METHODS: ValueLabels = ValueLabels::Int(&[
    (0, "Unspecified compression"),
    (1, "Modified Huffman"),
    (2, "Modified Read"),
    (3, "Modified MR"),
    (4, "JBIG"),
    (5, "Baseline JPEG"),
    (6, "JBIG color"),
]);

pub const Y_CB_CR_POSITIONING: ValueLabels = ValueLabels::Int(&[(1, "Centered"), (2, "Co-sited")]);

pub const COMPONENTS_CONFIGURATION: ValueLabels = ValueLabels::Int(&[
    (1, "Y"),
    (2, "Cb"),
    (3, "Cr"),
    (4, "R"),
    (5, "G"),
    (6, "B"),
]);

// =============================================================================
// Exposure
// =============================================================================

pub const EXPOSURE_PROGRAM: ValueLabels = ValueLabels::Int(&[
    (0, "Not Defined"),
    (1, "Manual"),
    (2, "Program AE"),
    (3, "Aperture-priority AE"),
    (4, "Shutter speed priority AE"),
    (5, "Creative (Slow speed)"),
    (6, "Action (High speed)"),
    (7, "Portrait"),
    (8, "Landscape"),
    (9, "Bulb"),
]);

pub const SENSITIVITY_TYPE: ValueLabels = ValueLabels::Int(&[
    (0, "Unknown"),
    (1, "Standard Output Sensitivity"),
    (2, "Recommended Exposure Index"),
    (3, "ISO Speed"),
    (4, "Standard Output Sensitivity and Recommended Exposure Index"),
    (5, "Standard Output Sensitivity and ISO Speed"),
    (6, "Recommended Exposure Index and ISO Speed"),
    (7, "Standard Output Sensitivity, Recommended Exposure Index and ISO Speed"),
]);

pub const METERING_MODE: ValueLabels = ValueLabels::Int(&[
    (0, "Unknown"),
    (1, "Average"),
    (2, "Center-weighted average"),
    (3, "Spot"),
    (4, "Multi-spot"),
    (5, "Multi-segment"),
    (6, "Partial"),
    (255, "Other"),
]);

pub const LIGHT_SOURCE: ValueLabels = ValueLabels::Int(&[
    (0, "Unknown"),
    (1, "Daylight"),
    (2, "Fluorescent"),
    (3, "Tungsten (Incandescent)"),
    (4, "Flash"),
    (9, "Fine Weather"),
    (10, "Cloudy"),
    (11, "Shade"),
    (12, "Daylight Fluorescent"),
    (13, "Day White Fluorescent"),
    (14, "Cool White Fluorescent"),
    (15, "White Fluorescent"),
    (16, "Warm White Fluorescent"),
    (17, "Standard Light A"),
    (18, "Standard Light B"),
    (19, "Standard Light C"),
    (20, "D55"),
    (21, "D65"),
    (22, "D75"),
    (23, "D50"),
    (24, "ISO Studio Tungsten"),
    (255, "Other"),
]);

pub const FLASH: ValueLabels = ValueLabels::Int(&[
    (0x00, "No Flash"),
    (0x01, "Fired"),
    (0x05, "Fired, Return not detected"),
    (0x07, "Fired, Return detected"),
    (0x08, "On, Did not fire"),
    (0x09, "On, Fired"),
    (0x0D, "On, Return not detected"),
    (0x0F, "On, Return detected"),
    (0x10, "Off, Did not fire"),
    (0x14, "Off, Did not fire, Return not detected"),
    (0x18, "Auto, Did not fire"),
    (0x19, "Auto, Fired"),
    (0x1D, "Auto, Fired, Return not detected"),
    (0x1F, "Auto, Fired, Return detected"),
    (0x20, "No flash function"),
    (0x30, "Off, No flash function"),
    (0x41, "Fired, Red-eye reduction"),
    (0x45, "Fired, Red-eye reduction, Return not detected"),
    (0x47, "Fired, Red-eye reduction, Return detected"),
    (0x49, "On, Red-eye reduction"),
    (0x4D, "On, Red-eye reduction, Return not detected"),
    (0x4F, "On, Red-eye reduction, Return detected"),
    (0x50, "Off, Red-eye reduction"),
    (0x58, "Auto, Did not fire, Red-eye reduction"),
    (0x59, "Auto, Fired, Red-eye reduction"),
    (0x5D, "Auto, Fired, Red-eye reduction, Return not detected"),
    (0x5F, "Auto, Fired, Red-eye reduction, Return detected"),
]);

pub const FOCAL_PLANE_RESOLUTION_UNIT: ValueLabels = ValueLabels::Int(&[
    (1, "None"),
    (2, "inches"),
    (3, "cm"),
    (4, "mm"),
    (5, "um"),
]);

pub const SECURITY_CLASSIFICATION: ValueLabels = ValueLabels::Text(&[
    ("C", "Confidential"),
    ("R", "Restricted"),
    ("S", "Secret"),
    ("T", "Top Secret"),
    ("U", "Unclassified"),
]);

pub const SENSING_METHOD: ValueLabels = ValueLabels::Int(&[
    (1, "Monochrome area"),
    (2, "One-chip color area"),
    (3, "Two-chip color area"),
    (4, "Three-chip color area"),
    (5, "Color sequential area"),
    (6, "Monochrome linear"),
    (7, "Trilinear"),
    (8, "Color sequential linear"),
]);

pub const FILE_SOURCE: ValueLabels = ValueLabels::Int(&[
    (1, "Film Scanner"),
    (2, "Reflection Print Scanner"),
    (3, "Digital Camera"),
]);

pub const SCENE_TYPE: ValueLabels = ValueLabels::Int(&[(1, "Directly photographed")]);

pub const COLOR_SPACE: ValueLabels = ValueLabels::Int(&[
    (0x1, "sRGB"),
    (0x2, "Adobe RGB"),
    (0xFFFD, "Wide Gamut RGB"),
    (0xFFFE, "ICC Profile"),
    (0xFFFF, "Uncalibrated"),
]);

pub const CUSTOM_RENDERED: ValueLabels = ValueLabels::Int(&[
    (0, "Normal"),
    (1, "Custom"),
    (2, "HDR (no original saved)"),
    (3, "HDR (original saved)"),
    (4, "Original (for HDR)"),
    (6, "Panorama"),
    (7, "Portrait HDR"),
    (8, "Portrait"),
]);

pub const EXPOSURE_MODE: ValueLabels =
    ValueLabels::Int(&[(0, "Auto"), (1, "Manual"), (2, "Auto bracket")]);

pub const WHITE_BALANCE: ValueLabels = ValueLabels::Int(&[(0, "Auto"), (1, "Manual")]);

pub const SCENE_CAPTURE_TYPE: ValueLabels = ValueLabels::Int(&[
    (0, "Standard"),
    (1, "Landscape"),
    (2, "Portrait"),
    (3, "Night"),
    (4, "Other"),
]);

pub const GAIN_CONTROL: ValueLabels = ValueLabels::Int(&[
    (0, "None"),
    (1, "Low gain up"),
    (2, "High gain up"),
    (3, "Low gain down"),
    (4, "High gain down"),
]);

/// Shared by contrast and saturation.
pub const LOW_NORMAL_HIGH: ValueLabels = ValueLabels::Int(&[(0, "Normal"), (1, "Low"), (2, "High")]);

pub const SHARPNESS: ValueLabels = ValueLabels::Int(&[(0, "Normal"), (1, "Soft"), (2, "Hard")]);

pub const SUBJECT_DISTANCE_RANGE: ValueLabels = ValueLabels::Int(&[
    (0, "Unknown"),
    (1, "Macro"),
    (2, "Close"),
    (3, "Distant"),
]);

// =============================================================================
// GPS
// =============================================================================

pub const GPS_LATITUDE_REF: ValueLabels = ValueLabels::Text(&[("N", "North"), ("S", "South")]);

pub const GPS_LONGITUDE_REF: ValueLabels = ValueLabels::Text(&[("E", "East"), ("W", "West")]);

pub const GPS_ALTITUDE_REF: ValueLabels =
    ValueLabels::Int(&[(0, "Above Sea Level"), (1, "Below Sea Level")]);

pub const GPS_STATUS: ValueLabels = ValueLabels::Text(&[
    ("A", "Measurement Active"),
    ("V", "Measurement Void"),
]);

pub const GPS_MEASURE_MODE: ValueLabels = ValueLabels::Int(&[
    (2, "2-Dimensional Measurement"),
    (3, "3-Dimensional Measurement"),
]);

pub const GPS_SPEED_REF: ValueLabels = ValueLabels::Text(&[
    ("K", "km/h"),
    ("M", "mph"),
    ("N", "knots"),
]);

/// Shared by track, image direction and destination bearing references.
pub const GPS_DIRECTION_REF: ValueLabels =
    ValueLabels::Text(&[("M", "Magnetic North"), ("T", "True North")]);

pub const GPS_DEST_DISTANCE_REF: ValueLabels = ValueLabels::Text(&[
    ("K", "Kilometers"),
    ("M", "Miles"),
    ("N", "Nautical Miles"),
]);

pub const GPS_DIFFERENTIAL: ValueLabels =
    ValueLabels::Int(&[(0, "No Correction"), (1, "Differential Corrected")]);
