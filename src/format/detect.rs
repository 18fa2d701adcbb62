//! File type gating.
//!
//! Metadata is only looked for in files whose extension says they are JPEG.
//! Files with any other extension are reported as "not a JPEG" without being
//! opened.

use std::path::Path;

/// Extensions accepted as JPEG, compared case-insensitively.
const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Check whether a path carries a JPEG file extension.
///
/// # Arguments
/// * `path` - File path to check
///
/// # Returns
/// `true` for `.jpg` and `.jpeg` in any letter case.
pub fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            JPEG_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}
