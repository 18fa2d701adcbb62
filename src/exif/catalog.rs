//! The EXIF tag catalog.
//!
//! Every tag the decoder knows is a variant of [`ExifTag`]. Its static
//! [`TagInfo`] carries the IFD kind and code it is found under, the display
//! label, unit prefix/suffix, and an optional table translating values to
//! text.
//!
//! Tags without a label are structural (IFD pointers) or not displayable
//! (maker notes, the GPS version). They drive decoding but are never stored
//! in the extracted metadata.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::format::tiff::{format_number, IfdKind, TagValue};

use super::labels::{self, ValueLabels};

// =============================================================================
// TagInfo
// =============================================================================

/// Static description of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// Tag namespace the code belongs to
    pub kind: IfdKind,

    /// Numeric tag code
    pub code: u16,

    /// Display label; `None` for tags that are never shown
    pub label: Option<&'static str>,

    /// Unit text placed before the value
    pub prefix: Option<&'static str>,

    /// Unit text placed after the value
    pub suffix: Option<&'static str>,

    /// Value translation table
    pub values: Option<ValueLabels>,

    /// `values` is keyed by bit position and every set bit contributes a label
    pub bit_values: bool,
}

impl TagInfo {
    const fn new(kind: IfdKind, code: u16, label: Option<&'static str>) -> Self {
        TagInfo {
            kind,
            code,
            label,
            prefix: None,
            suffix: None,
            values: None,
            bit_values: false,
        }
    }

    const fn standard(code: u16, label: &'static str) -> Self {
        Self::new(IfdKind::Standard, code, Some(label))
    }

    const fn gps(code: u16, label: &'static str) -> Self {
        Self::new(IfdKind::Gps, code, Some(label))
    }

    const fn hidden(kind: IfdKind, code: u16) -> Self {
        Self::new(kind, code, None)
    }

    const fn prefix(self, prefix: &'static str) -> Self {
        TagInfo {
            prefix: Some(prefix),
            ..self
        }
    }

    const fn suffix(self, suffix: &'static str) -> Self {
        TagInfo {
            suffix: Some(suffix),
            ..self
        }
    }

    const fn values(self, values: ValueLabels) -> Self {
        TagInfo {
            values: Some(values),
            ..self
        }
    }

    const fn bit_values(self, values: ValueLabels) -> Self {
        TagInfo {
            values: Some(values),
            bit_values: true,
            ..self
        }
    }
}

// =============================================================================
// ExifTag
// =============================================================================

macro_rules! exif_tags {
    ($($variant:ident => $info:expr,)*) => {
        /// A known EXIF tag.
        ///
        /// Tags order by [`ExifTag::sort_order`]: GPS tags first, then
        /// standard tags, each by code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ExifTag {
            $($variant,)*
        }

        impl ExifTag {
            /// Every tag in catalog order.
            pub const ALL: &'static [ExifTag] = &[$(ExifTag::$variant,)*];

            /// The tag's static description.
            pub fn info(self) -> &'static TagInfo {
                match self {
                    $(ExifTag::$variant => {
                        static INFO: TagInfo = $info;
                        &INFO
                    })*
                }
            }

            /// The variant name, e.g. `"ExposureTime"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ExifTag::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

use IfdKind::{Gps, Standard};

exif_tags! {
    Unknown => TagInfo::hidden(Standard, 0x0000),

    // IFD0 / Exif / Interoperability
    InteropIndex => TagInfo::standard(0x0001, "Interoperability index"),
    InteropVersion => TagInfo::standard(0x0002, "Interoperability version"),
    ProcessingSoftware => TagInfo::standard(0x000B, "Processing software"),
    SubfileType => TagInfo::standard(0x00FE, "Subfile type").values(labels::SUBFILE_TYPE),
    ImageWidth => TagInfo::standard(0x0100, "Image width"),
    ImageHeight => TagInfo::standard(0x0101, "Image height"),
    BitsPerSample => TagInfo::standard(0x0102, "Bits per sample"),
    Compression => TagInfo::standard(0x0103, "Compression").values(labels::COMPRESSION),
    PhotometricInterpretation => TagInfo::standard(0x0106, "Photometric interpretation")
        .values(labels::PHOTOMETRIC_INTERPRETATION),
    Thresholding => TagInfo::standard(0x0107, "Thresholding").values(labels::THRESHOLDING),
    CellWidth => TagInfo::standard(0x0108, "Cell width"),
    CellHeight => TagInfo::standard(0x0109, "Cell height"),
    FillOrder => TagInfo::standard(0x010A, "Fill order").values(labels::FILL_ORDER),
    DocumentName => TagInfo::standard(0x010D, "Document name"),
    ImageDescription => TagInfo::standard(0x010E, "Image description"),
    Make => TagInfo::standard(0x010F, "Make"),
    Model => TagInfo::standard(0x0110, "Model"),
    Orientation => TagInfo::standard(0x0112, "Orientation").values(labels::ORIENTATION),
    SamplesPerPixel => TagInfo::standard(0x0115, "Samples per pixel"),
    MinSampleValue => TagInfo::standard(0x0118, "Min sample value"),
    MaxSampleValue => TagInfo::standard(0x0119, "Max sample value"),
    XResolution => TagInfo::standard(0x011A, "X resolution"),
    YResolution => TagInfo::standard(0x011B, "Y resolution"),
    PlanarConfiguration => TagInfo::standard(0x011C, "Planar configuration")
        .values(labels::PLANAR_CONFIGURATION),
    PageName => TagInfo::standard(0x011D, "Page name"),
    XPosition => TagInfo::standard(0x011E, "X position"),
    YPosition => TagInfo::standard(0x011F, "Y position"),
    FreeOffsets => TagInfo::standard(0x0120, "Free offsets"),
    FreeByteCounts => TagInfo::standard(0x0121, "Free byte counts"),
    GrayResponseUnit => TagInfo::standard(0x0122, "Gray response unit")
        .values(labels::GRAY_RESPONSE_UNIT),
    GrayResponseCurve => TagInfo::standard(0x0123, "Gray response curve"),
    ResolutionUnit => TagInfo::standard(0x0128, "Resolution unit").values(labels::RESOLUTION_UNIT),
    PageNumber => TagInfo::standard(0x0129, "Page number"),
    ColorResponseUnit => TagInfo::standard(0x012C, "Color response unit"),
    Software => TagInfo::standard(0x0131, "Software"),
    DateTime => TagInfo::standard(0x0132, "Date/time"),
    Artist => TagInfo::standard(0x013B, "Artist"),
    HostComputer => TagInfo::standard(0x013C, "Host computer"),
    WhitePoint => TagInfo::standard(0x013E, "White point"),
    PrimaryChromaticities => TagInfo::standard(0x013F, "Primary chromaticities"),
    HalftoneHints => TagInfo::standard(0x0141, "Halftone hints"),
    CodingMethods => TagInfo::standard(0x0193, "Coding methods").bit_values(labels::CODING_METHODS),
    VersionYear => TagInfo::standard(0x0194, "Version year"),
    ModeNumber => TagInfo::standard(0x0195, "Mode number"),
    YCbCrCoefficients => TagInfo::standard(0x0211, "YCbCr coefficients"),
    YCbCrSubSampling => TagInfo::standard(0x0212, "YCbCr sub-sampling"),
    YCbCrPositioning => TagInfo::standard(0x0213, "YCbCr positioning")
        .values(labels::Y_CB_CR_POSITIONING),
    ReferenceBlackWhite => TagInfo::standard(0x0214, "Reference black/white"),
    RelatedImageFileFormat => TagInfo::standard(0x1000, "Related image file format"),
    RelatedImageWidth => TagInfo::standard(0x1001, "Related image width"),
    RelatedImageHeight => TagInfo::standard(0x1002, "Related image height"),
    Copyright => TagInfo::standard(0x8298, "Copyright"),
    ExposureTime => TagInfo::standard(0x829A, "Exposure time").suffix(" s"),
    FNumber => TagInfo::standard(0x829D, "F-number").prefix("F "),
    ExifOffset => TagInfo::hidden(Standard, 0x8769),
    ExposureProgram => TagInfo::standard(0x8822, "Exposure program")
        .values(labels::EXPOSURE_PROGRAM),
    SpectralSensitivity => TagInfo::standard(0x8824, "Spectral sensitivity"),
    ExifGps => TagInfo::hidden(Standard, 0x8825),
    Iso => TagInfo::standard(0x8827, "ISO"),
    TimeZoneOffset => TagInfo::standard(0x882A, "Time zone offset"),
    SelfTimerMode => TagInfo::standard(0x882B, "Self-timer mode"),
    SensitivityType => TagInfo::standard(0x8830, "Sensitivity type")
        .values(labels::SENSITIVITY_TYPE),
    StandardOutputSensitivity => TagInfo::standard(0x8831, "Standard output sensitivity"),
    RecommendedExposureIndex => TagInfo::standard(0x8832, "Recommended exposure index"),
    IsoSpeed => TagInfo::standard(0x8833, "ISO speed"),
    ExifVersion => TagInfo::standard(0x9000, "Exif version"),
    DateTimeOriginal => TagInfo::standard(0x9003, "Date/time original"),
    DateTimeDigitized => TagInfo::standard(0x9004, "Date/time digitized"),
    OffsetTime => TagInfo::standard(0x9010, "Offset time"),
    OffsetTimeOriginal => TagInfo::standard(0x9011, "Offset time original"),
    OffsetTimeDigitized => TagInfo::standard(0x9012, "Offset time digitized"),
    ComponentsConfiguration => TagInfo::standard(0x9101, "Components configuration")
        .values(labels::COMPONENTS_CONFIGURATION),
    CompressedBitsPerPixel => TagInfo::standard(0x9102, "Compressed bits per pixel"),
    ShutterSpeed => TagInfo::standard(0x9201, "Shutter speed").suffix(" s"),
    Aperture => TagInfo::standard(0x9202, "Aperture").prefix("F "),
    Brightness => TagInfo::standard(0x9203, "Brightness"),
    ExposureCompensation => TagInfo::standard(0x9204, "Exposure compensation"),
    MaxAperture => TagInfo::standard(0x9205, "Max aperture").prefix("F "),
    SubjectDistance => TagInfo::standard(0x9206, "Subject distance").suffix(" m"),
    MeteringMode => TagInfo::standard(0x9207, "Metering mode").values(labels::METERING_MODE),
    LightSource => TagInfo::standard(0x9208, "Light source").values(labels::LIGHT_SOURCE),
    Flash => TagInfo::standard(0x9209, "Flash").values(labels::FLASH),
    FocalLength => TagInfo::standard(0x920A, "Focal length").suffix(" mm"),
    FlashEnergy => TagInfo::standard(0x920B, "Flash energy"),
    SpatialFreqResponse => TagInfo::standard(0x920C, "Spatial frequency response"),
    Noise => TagInfo::standard(0x920D, "Noise"),
    FocalPlaneXResolution => TagInfo::standard(0x920E, "Focal plane X resolution"),
    FocalPlaneYResolution => TagInfo::standard(0x920F, "Focal plane Y resolution"),
    FocalPlaneResolutionUnit => TagInfo::standard(0x9210, "Focal plane resolution unit")
        .values(labels::FOCAL_PLANE_RESOLUTION_UNIT),
    ImageNumber => TagInfo::standard(0x9211, "Image number"),
    SecurityClassification => TagInfo::standard(0x9212, "Security classification")
        .values(labels::SECURITY_CLASSIFICATION),
    ImageHistory => TagInfo::standard(0x9213, "Image history"),
    SubjectArea => TagInfo::standard(0x9214, "Subject area"),
    ExposureIndex => TagInfo::standard(0x9215, "Exposure index"),
    SensingMethod => TagInfo::standard(0x9217, "Sensing method").values(labels::SENSING_METHOD),
    MakerNote => TagInfo::hidden(Standard, 0x927C),
    UserComment => TagInfo::standard(0x9286, "User comment"),
    SubSecTime => TagInfo::standard(0x9290, "Sub-second time"),
    SubSecTimeOriginal => TagInfo::standard(0x9291, "Sub-second time original"),
    SubSecTimeDigitized => TagInfo::standard(0x9292, "Sub-second time digitized"),
    AmbientTemperature => TagInfo::standard(0x9400, "Ambient temperature").suffix("\u{00B0}C"),
    Humidity => TagInfo::standard(0x9401, "Humidity").suffix("%"),
    Pressure => TagInfo::standard(0x9402, "Air pressure").suffix(" hPa"),
    WaterDepth => TagInfo::standard(0x9403, "Water depth").suffix(" m"),
    Acceleration => TagInfo::standard(0x9404, "Acceleration")
        .suffix(" * 10\u{207B}\u{2075} m/s\u{00B2}"),
    CameraElevationAngle => TagInfo::standard(0x9405, "Camera elevation angle").suffix(" \u{00B0}"),
    FlashpixVersion => TagInfo::standard(0xA000, "FlashPix version"),
    ColorSpace => TagInfo::standard(0xA001, "Color space").values(labels::COLOR_SPACE),
    ExifImageWidth => TagInfo::standard(0xA002, "Exif image width"),
    ExifImageHeight => TagInfo::standard(0xA003, "Exif image height"),
    RelatedSoundFile => TagInfo::standard(0xA004, "Related sound file"),
    InteropOffset => TagInfo::hidden(Standard, 0xA005),
    FlashEnergy2 => TagInfo::standard(0xA20B, "Flash energy"),
    SpatialFreqResponse2 => TagInfo::standard(0xA20C, "Spatial frequency response"),
    Noise2 => TagInfo::standard(0xA20D, "Noise"),
    FocalPlaneXResolution2 => TagInfo::standard(0xA20E, "Focal plane X resolution"),
    FocalPlaneYResolution2 => TagInfo::standard(0xA20F, "Focal plane Y resolution"),
    FocalPlaneResolutionUnit2 => TagInfo::standard(0xA210, "Focal plane resolution unit")
        .values(labels::FOCAL_PLANE_RESOLUTION_UNIT),
    ImageNumber2 => TagInfo::standard(0xA211, "Image number"),
    SecurityClassification2 => TagInfo::standard(0xA212, "Security classification")
        .values(labels::SECURITY_CLASSIFICATION),
    ImageHistory2 => TagInfo::standard(0xA213, "Image history"),
    SubjectLocation => TagInfo::standard(0xA214, "Subject location"),
    ExposureIndex2 => TagInfo::standard(0xA215, "Exposure index"),
    SensingMethod2 => TagInfo::standard(0xA217, "Sensing method").values(labels::SENSING_METHOD),
    FileSource => TagInfo::standard(0xA300, "File source").values(labels::FILE_SOURCE),
    SceneType => TagInfo::standard(0xA301, "Scene type").values(labels::SCENE_TYPE),
    CfaPattern => TagInfo::standard(0xA302, "CFA pattern"),
    CustomRendered => TagInfo::standard(0xA401, "Custom rendered").values(labels::CUSTOM_RENDERED),
    ExposureMode => TagInfo::standard(0xA402, "Exposure mode").values(labels::EXPOSURE_MODE),
    WhiteBalance => TagInfo::standard(0xA403, "White balance").values(labels::WHITE_BALANCE),
    DigitalZoomRatio => TagInfo::standard(0xA404, "Digital zoom ratio"),
    FocalLengthIn35mmFormat => TagInfo::standard(0xA405, "Focal length in 35mm format")
        .suffix(" mm"),
    SceneCaptureType => TagInfo::standard(0xA406, "Scene capture type")
        .values(labels::SCENE_CAPTURE_TYPE),
    GainControl => TagInfo::standard(0xA407, "Gain control").values(labels::GAIN_CONTROL),
    Contrast => TagInfo::standard(0xA408, "Contrast").values(labels::LOW_NORMAL_HIGH),
    Saturation => TagInfo::standard(0xA409, "Saturation").values(labels::LOW_NORMAL_HIGH),
    Sharpness => TagInfo::standard(0xA40A, "Sharpness").values(labels::SHARPNESS),
    DeviceSettingDescription => TagInfo::standard(0xA40B, "Device setting description"),
    SubjectDistanceRange => TagInfo::standard(0xA40C, "Subject distance range")
        .values(labels::SUBJECT_DISTANCE_RANGE),
    ImageUniqueId => TagInfo::standard(0xA420, "Image unique ID"),
    OwnerName => TagInfo::standard(0xA430, "Owner name"),
    SerialNumber => TagInfo::standard(0xA431, "Serial number"),
    LensInfo => TagInfo::standard(0xA432, "Lens info"),
    LensMake => TagInfo::standard(0xA433, "Lens make"),
    LensModel => TagInfo::standard(0xA434, "Lens model"),
    LensSerialNumber => TagInfo::standard(0xA435, "Lens serial number"),
    Title => TagInfo::standard(0xA436, "Title"),
    Photographer => TagInfo::standard(0xA437, "Photographer"),
    ImageEditor => TagInfo::standard(0xA438, "Image editor"),
    CameraFirmware => TagInfo::standard(0xA439, "Camera firmware"),
    Gamma => TagInfo::standard(0xA500, "Gamma"),

    // GPS IFD
    GpsVersionId => TagInfo::hidden(Gps, 0x0000),
    GpsLatitudeRef => TagInfo::gps(0x0001, "GPS latitude hemisphere")
        .values(labels::GPS_LATITUDE_REF),
    GpsLatitude => TagInfo::gps(0x0002, "GPS latitude"),
    GpsLongitudeRef => TagInfo::gps(0x0003, "GPS longitude hemisphere")
        .values(labels::GPS_LONGITUDE_REF),
    GpsLongitude => TagInfo::gps(0x0004, "GPS longitude"),
    GpsAltitudeRef => TagInfo::gps(0x0005, "GPS altitude reference")
        .values(labels::GPS_ALTITUDE_REF),
    GpsAltitude => TagInfo::gps(0x0006, "GPS altitude").suffix(" m"),
    GpsTimestamp => TagInfo::gps(0x0007, "GPS time stamp"),
    GpsSatellites => TagInfo::gps(0x0008, "GPS satellites"),
    GpsStatus => TagInfo::gps(0x0009, "GPS status").values(labels::GPS_STATUS),
    GpsMeasureMode => TagInfo::gps(0x000A, "GPS measure mode").values(labels::GPS_MEASURE_MODE),
    GpsDop => TagInfo::gps(0x000B, "GPS dilution of precision"),
    GpsSpeedRef => TagInfo::gps(0x000C, "GPS speed unit").values(labels::GPS_SPEED_REF),
    GpsSpeed => TagInfo::gps(0x000D, "GPS speed"),
    GpsTrackRef => TagInfo::gps(0x000E, "GPS track reference").values(labels::GPS_DIRECTION_REF),
    GpsTrack => TagInfo::gps(0x000F, "GPS track"),
    GpsImgDirectionRef => TagInfo::gps(0x0010, "GPS image direction reference")
        .values(labels::GPS_DIRECTION_REF),
    GpsImgDirection => TagInfo::gps(0x0011, "GPS image direction"),
    GpsMapDatum => TagInfo::gps(0x0012, "GPS map datum"),
    GpsDestLatitudeRef => TagInfo::gps(0x0013, "GPS destination latitude hemisphere")
        .values(labels::GPS_LATITUDE_REF),
    GpsDestLatitude => TagInfo::gps(0x0014, "GPS destination latitude"),
    GpsDestLongitudeRef => TagInfo::gps(0x0015, "GPS destination longitude hemisphere")
        .values(labels::GPS_LONGITUDE_REF),
    GpsDestLongitude => TagInfo::gps(0x0016, "GPS destination longitude"),
    GpsDestBearingRef => TagInfo::gps(0x0017, "GPS destination bearing reference")
        .values(labels::GPS_DIRECTION_REF),
    GpsDestBearing => TagInfo::gps(0x0018, "GPS destination bearing"),
    GpsDestDistanceRef => TagInfo::gps(0x0019, "GPS destination distance unit")
        .values(labels::GPS_DEST_DISTANCE_REF),
    GpsDestDistance => TagInfo::gps(0x001A, "GPS destination distance"),
    GpsProcessingMethod => TagInfo::gps(0x001B, "GPS processing method"),
    GpsAreaInformation => TagInfo::gps(0x001C, "GPS area information"),
    GpsDateStamp => TagInfo::gps(0x001D, "GPS date stamp"),
    GpsDifferential => TagInfo::gps(0x001E, "GPS differential").values(labels::GPS_DIFFERENTIAL),
    GpsHPositioningError => TagInfo::gps(0x001F, "GPS horizontal positioning error"),
}

/// Maps (kind, code) to a tag.
fn code_index() -> &'static HashMap<(IfdKind, u16), ExifTag> {
    static INDEX: OnceLock<HashMap<(IfdKind, u16), ExifTag>> = OnceLock::new();
    INDEX.get_or_init(|| {
        ExifTag::ALL
            .iter()
            .map(|tag| ((tag.kind(), tag.code()), *tag))
            .collect()
    })
}

impl ExifTag {
    /// Look up a tag by IFD kind and code, `Unknown` when not catalogued.
    pub fn from_code(kind: IfdKind, code: u16) -> ExifTag {
        code_index()
            .get(&(kind, code))
            .copied()
            .unwrap_or(ExifTag::Unknown)
    }

    /// Look up a tag by its variant name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<ExifTag> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn kind(self) -> IfdKind {
        self.info().kind
    }

    #[inline]
    pub fn code(self) -> u16 {
        self.info().code
    }

    #[inline]
    pub fn label(self) -> Option<&'static str> {
        self.info().label
    }

    #[inline]
    pub fn prefix(self) -> Option<&'static str> {
        self.info().prefix
    }

    #[inline]
    pub fn suffix(self) -> Option<&'static str> {
        self.info().suffix
    }

    /// Display ordering key: the code, with GPS codes moved below zero.
    pub fn sort_order(self) -> i32 {
        let info = self.info();
        match info.kind {
            IfdKind::Standard => info.code as i32,
            IfdKind::Gps => info.code as i32 - 0x10000,
        }
    }

    /// Whether the tag points to a sub-IFD.
    pub fn is_ifd_pointer(self) -> bool {
        matches!(
            self,
            ExifTag::ExifOffset | ExifTag::ExifGps | ExifTag::InteropOffset
        )
    }

    /// Translate a value through the tag's label table.
    ///
    /// Bit-flag tags list the label of every set bit. Byte buffers are
    /// translated byte by byte, skipping bytes without a label. Both join
    /// with `", "`. Returns `None` when the tag has no table or the value has
    /// no label.
    pub fn translate_value(self, value: &TagValue) -> Option<String> {
        let info = self.info();
        let labels = info.values?;

        if info.bit_values {
            if let Some(bits) = value.as_i64() {
                return Some(translate_bits(labels, bits));
            }
        }

        match value {
            TagValue::Bytes(bytes) => Some(
                bytes
                    .iter()
                    .filter_map(|b| labels.by_int(*b as i64))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            TagValue::Integer(v) => labels.by_int(*v).map(str::to_string),
            TagValue::Text(s) => labels.by_text(s).map(str::to_string),
            _ => None,
        }
    }

    /// Render a value for display, units included.
    ///
    /// Exposure and shutter times up to half a second are shown as a
    /// fraction, e.g. `1 / 250 s`.
    pub fn display_value(self, value: &TagValue) -> String {
        let mut text = match self.translate_value(value) {
            Some(translated) => translated,
            None => match (self, value.as_f64()) {
                (ExifTag::ExposureTime | ExifTag::ShutterSpeed, Some(time)) => {
                    format_exposure(time)
                }
                _ => value.to_string(),
            },
        };

        if let Some(prefix) = self.prefix() {
            text.insert_str(0, prefix);
        }
        if let Some(suffix) = self.suffix() {
            text.push_str(suffix);
        }
        text
    }
}

fn translate_bits(labels: ValueLabels, bits: i64) -> String {
    let ValueLabels::Int(entries) = labels else {
        return String::new();
    };
    entries
        .iter()
        .filter(|(bit, _)| (0..63).contains(bit) && bits & (1i64 << bit) != 0)
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_exposure(time: f64) -> String {
    if time <= 0.5 {
        let denominator = if time != 0.0 { 1.0 / time } else { 0.0 };
        format!("1 / {}", denominator.round() as i64)
    } else {
        format_number(time)
    }
}

impl PartialOrd for ExifTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExifTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_order().cmp(&other.sort_order())
    }
}

// =============================================================================
// Tests
// =============================================================================
