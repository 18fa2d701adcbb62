//! Thumbnail cache integration tests.
//!
//! Tests verify:
//! - Entries are keyed on the file path and its size on disk
//! - Rewriting a file with a different size invalidates its thumbnail
//! - The cache works behind a shared trait object

use std::fs;
use std::sync::Arc;
use std::thread;

use bytes::Bytes;
use jpeg_meta::thumbnail::{MemoryThumbnailCache, ThumbnailCache};

use super::test_utils::{camera_tiff, temp_jpeg, write_file, ByteOrderType, JpegBuilder};

fn file_size(path: &std::path::Path) -> u64 {
    fs::metadata(path).unwrap().len()
}

#[test]
fn test_thumbnail_for_file_on_disk() {
    let data = JpegBuilder::new()
        .exif(&camera_tiff(ByteOrderType::LittleEndian))
        .build();
    let (_dir, path) = temp_jpeg(&data);
    let cache = MemoryThumbnailCache::new();
    let thumbnail = Bytes::from_static(b"thumbnail");

    cache.put(&path, file_size(&path), thumbnail.clone());

    assert_eq!(cache.get(&path, file_size(&path)), Some(thumbnail));
}

#[test]
fn test_rewritten_file_invalidates_thumbnail() {
    let (dir, path) = temp_jpeg(&JpegBuilder::new().jfif().build());
    let cache = MemoryThumbnailCache::new();
    cache.put(&path, file_size(&path), Bytes::from_static(b"old"));

    // Same name, more segments
    write_file(&dir, "image.jpg", &JpegBuilder::new().jfif().tables().build());

    assert_eq!(cache.get(&path, file_size(&path)), None);
    assert!(!cache.contains(&path));
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_shared_cache_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let cache: Arc<dyn ThumbnailCache> = Arc::new(MemoryThumbnailCache::with_capacity(1024));

    let paths: Vec<_> = (0..4)
        .map(|i| write_file(&dir, &format!("photo_{}.jpg", i), &JpegBuilder::new().build()))
        .collect();

    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let size = fs::metadata(&path).unwrap().len();
                cache.put(&path, size, Bytes::from(vec![0u8; 16]));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for path in &paths {
        assert!(cache.get(path, file_size(path)).is_some());
    }
}
