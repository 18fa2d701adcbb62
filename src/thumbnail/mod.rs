//! Thumbnail cache.
//!
//! Thumbnails are keyed by the path of the image they were made from. The
//! file size is stored alongside the bytes so that an entry made from an
//! older version of the file is not served after the file changes.

mod cache;

pub use cache::{MemoryThumbnailCache, ThumbnailCache, DEFAULT_THUMBNAIL_CACHE_CAPACITY};
