//! In-memory LRU thumbnail cache with a byte budget.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use lru::LruCache;
use tracing::trace;

/// Default cache capacity: 32MB
pub const DEFAULT_THUMBNAIL_CACHE_CAPACITY: usize = 32 * 1024 * 1024;

/// Default maximum number of entries (to bound LRU overhead)
const DEFAULT_MAX_ENTRIES: usize = 10_000;

// =============================================================================
// ThumbnailCache
// =============================================================================

/// Storage for encoded thumbnails.
pub trait ThumbnailCache: Send + Sync {
    /// The thumbnail of `path`, if one was stored for a file of `file_size`
    /// bytes.
    fn get(&self, path: &Path, file_size: u64) -> Option<Bytes>;

    /// Store the thumbnail of `path`, replacing any previous one.
    fn put(&self, path: &Path, file_size: u64, data: Bytes);
}

// =============================================================================
// MemoryThumbnailCache
// =============================================================================

struct Entry {
    file_size: u64,
    data: Bytes,
}

struct Inner {
    entries: LruCache<PathBuf, Entry>,
    current_size: usize,
}

impl Inner {
    fn remove(&mut self, path: &Path) -> Option<Entry> {
        let entry = self.entries.pop(path)?;
        self.current_size = self.current_size.saturating_sub(entry.data.len());
        Some(entry)
    }
}

/// LRU cache of thumbnails held in memory.
///
/// Least-recently-used entries are evicted once the total size of the cached
/// thumbnails exceeds the capacity.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use bytes::Bytes;
/// use jpeg_meta::thumbnail::{MemoryThumbnailCache, ThumbnailCache};
///
/// let cache = MemoryThumbnailCache::new();
/// let path = Path::new("/photos/IMG_0001.jpg");
/// cache.put(path, 2_481_152, Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xD9]));
///
/// assert!(cache.get(path, 2_481_152).is_some());
/// // The file was rewritten since
/// assert!(cache.get(path, 2_500_000).is_none());
/// ```
pub struct MemoryThumbnailCache {
    inner: Mutex<Inner>,
    max_size: usize,
}

impl MemoryThumbnailCache {
    /// Create a cache with the default capacity (32MB).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_THUMBNAIL_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `max_size` bytes of thumbnails.
    pub fn with_capacity(max_size: usize) -> Self {
        Self::with_capacity_and_entries(max_size, DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache with a byte capacity and a maximum number of entries.
    ///
    /// # Arguments
    ///
    /// * `max_size` - Maximum total size of cached thumbnails in bytes
    /// * `max_entries` - Maximum number of entries; zero is treated as one
    pub fn with_capacity_and_entries(max_size: usize, max_entries: usize) -> Self {
        let max_entries = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(max_entries),
                current_size: 0,
            }),
            max_size,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every update leaves the size consistent, so a poisoned lock is usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove the thumbnail of `path`, returning its bytes.
    pub fn remove(&self, path: &Path) -> Option<Bytes> {
        self.lock().remove(path).map(|entry| entry.data)
    }

    /// Whether a thumbnail of `path` is cached, regardless of file size and
    /// without updating LRU order.
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().entries.contains(path)
    }

    /// Remove all entries.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.current_size = 0;
    }

    /// Number of cached thumbnails.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Total size of the cached thumbnails in bytes.
    pub fn size(&self) -> usize {
        self.lock().current_size
    }

    /// Maximum total size in bytes.
    pub fn capacity(&self) -> usize {
        self.max_size
    }
}

impl Default for MemoryThumbnailCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailCache for MemoryThumbnailCache {
    fn get(&self, path: &Path, file_size: u64) -> Option<Bytes> {
        let mut inner = self.lock();
        let stored_size = inner.entries.get(path)?.file_size;
        if stored_size != file_size {
            trace!(path = %path.display(), stored_size, file_size, "Dropping stale thumbnail");
            inner.remove(path);
            return None;
        }
        inner.entries.peek(path).map(|entry| entry.data.clone())
    }

    fn put(&self, path: &Path, file_size: u64, data: Bytes) {
        let data_size = data.len();
        let mut inner = self.lock();

        inner.remove(path);
        let displaced = inner
            .entries
            .push(path.to_path_buf(), Entry { file_size, data });
        if let Some((_, evicted)) = displaced {
            // Entry limit reached
            inner.current_size = inner.current_size.saturating_sub(evicted.data.len());
        }
        inner.current_size += data_size;

        while inner.current_size > self.max_size {
            match inner.entries.pop_lru() {
                Some((evicted_path, evicted)) => {
                    trace!(path = %evicted_path.display(), size = evicted.data.len(), "Evicted thumbnail");
                    inner.current_size = inner.current_size.saturating_sub(evicted.data.len());
                }
                None => break,
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
