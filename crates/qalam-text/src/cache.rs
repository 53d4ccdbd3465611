#![forbid(unsafe_code)]

//! LRU cache of shaped strings.
//!
//! UI code tends to re-shape the same labels every frame. [`ShapeCache`]
//! remembers the output of [`fix`](crate::fix()) per `(text, options)` pair.
//!
//! # Example
//! ```
//! use qalam_core::ShapeOptions;
//! use qalam_text::ShapeCache;
//!
//! let mut cache = ShapeCache::new(64);
//! let opts = ShapeOptions::default();
//!
//! let first = cache.get_or_shape("\u{0644}\u{0627}", &opts);
//! let second = cache.get_or_shape("\u{0644}\u{0627}", &opts);
//! assert_eq!(first, second);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use lru::LruCache;
use qalam_core::ShapeOptions;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::fix::fix;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct Entry {
    source: String,
    options: ShapeOptions,
    shaped: String,
}

impl Entry {
    fn matches(&self, text: &str, options: &ShapeOptions) -> bool {
        self.options == *options && self.source == text
    }
}

/// LRU cache of shaped output.
///
/// Keys are 64-bit FxHash values of the text and options. Each entry keeps
/// its source text and is checked on lookup, so a hash collision costs a
/// re-shape rather than a wrong answer.
///
/// `ShapeCache` is not thread-safe; wrap it in a mutex or keep one per thread.
#[derive(Debug)]
pub struct ShapeCache {
    cache: LruCache<u64, Entry>,
    hits: u64,
    misses: u64,
}

impl ShapeCache {
    /// Create a cache holding up to `capacity` entries (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Return the cached shaping of `text`, shaping and caching it on a miss.
    pub fn get_or_shape(&mut self, text: &str, options: &ShapeOptions) -> String {
        let key = hash_key(text, options);
        if let Some(entry) = self.cache.get(&key)
            && entry.matches(text, options)
        {
            self.hits += 1;
            return entry.shaped.clone();
        }

        self.misses += 1;
        let shaped = fix(text, options);
        self.cache.put(
            key,
            Entry {
                source: text.to_string(),
                options: *options,
                shaped: shaped.clone(),
            },
        );
        shaped
    }

    /// Look up without shaping or updating LRU order.
    #[must_use]
    pub fn peek(&self, text: &str, options: &ShapeOptions) -> Option<&str> {
        self.cache
            .peek(&hash_key(text, options))
            .filter(|entry| entry.matches(text, options))
            .map(|entry| entry.shaped.as_str())
    }

    #[must_use]
    pub fn contains(&self, text: &str, options: &ShapeOptions) -> bool {
        self.peek(text, options).is_some()
    }

    /// Drop all entries; statistics are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Zero the hit/miss counters.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_key(text: &str, options: &ShapeOptions) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    options.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAM_ALEF: &str = "\u{0644}\u{0627}";

    #[test]
    fn zero_capacity_becomes_one() {
        let cache = ShapeCache::new(0);
        assert_eq!(cache.stats().capacity, 1);
    }

    #[test]
    fn miss_then_hit() {
        let mut cache = ShapeCache::new(8);
        let opts = ShapeOptions::default();
        assert_eq!(cache.get_or_shape(LAM_ALEF, &opts), "\u{FEFB}");
        assert_eq!(cache.get_or_shape(LAM_ALEF, &opts), "\u{FEFB}");
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.size), (1, 1, 1));
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn options_are_part_of_the_key() {
        let mut cache = ShapeCache::new(8);
        let western = ShapeOptions::default();
        let eastern = western.with_preserve_numbers(false);
        assert_eq!(cache.get_or_shape("12", &western), "12");
        assert_eq!(cache.get_or_shape("12", &eastern), "\u{0661}\u{0662}");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = ShapeCache::new(2);
        let opts = ShapeOptions::default();
        cache.get_or_shape("a", &opts);
        cache.get_or_shape("b", &opts);
        cache.get_or_shape("a", &opts);
        cache.get_or_shape("c", &opts);

        assert!(cache.contains("a", &opts));
        assert!(!cache.contains("b", &opts));
        assert!(cache.contains("c", &opts));
    }

    #[test]
    fn peek_does_not_count() {
        let mut cache = ShapeCache::new(4);
        let opts = ShapeOptions::default();
        assert_eq!(cache.peek(LAM_ALEF, &opts), None);
        cache.get_or_shape(LAM_ALEF, &opts);
        assert_eq!(cache.peek(LAM_ALEF, &opts), Some("\u{FEFB}"));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn clear_and_reset() {
        let mut cache = ShapeCache::default();
        let opts = ShapeOptions::default();
        cache.get_or_shape("x", &opts);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats {
            hits: 0,
            misses: 0,
            size: 0,
            capacity: DEFAULT_CACHE_CAPACITY,
        });
    }

    #[test]
    fn hit_rate_empty_is_zero() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
