//! Thread-safe cache of twiddle-factor tables.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::complex::Complex;

/// Sign of the exponent used by a transform.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Direction {
    /// Principal root `(cos θ, sin θ)`.
    Forward,
    /// Conjugate root `(cos θ, -sin θ)`.
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Inverse => -1.0,
        }
    }
}

/// Cache key for twiddle tables.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct TwiddleKey {
    pub size: usize,
    pub direction: Direction,
}

/// Compute `w^k` for `k` in `0..size/2`, where `w = e^(±2πi/size)`.
///
/// Each entry comes from its own `sin_cos` call so error does not
/// accumulate across the table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn twiddle_table(size: usize, direction: Direction) -> Vec<Complex> {
    let step = direction.sign() * 2.0 * PI / size as f64;
    (0..size / 2)
        .map(|k| Complex::from_polar(1.0, step * k as f64))
        .collect()
}

/// Thread-safe cache for twiddle tables, one per transform size and direction.
pub struct TwiddleCache {
    cache: Mutex<HashMap<TwiddleKey, Arc<[Complex]>>>,
    max_entries: usize,
}

impl TwiddleCache {
    /// Create a new cache with the given maximum entries.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    /// Get a cached table, if available.
    pub fn get(&self, key: &TwiddleKey) -> Option<Arc<[Complex]>> {
        self.cache.lock().get(key).cloned()
    }

    /// Store a table in the cache.
    pub fn put(&self, key: TwiddleKey, table: Arc<[Complex]>) {
        let mut cache = self.cache.lock();
        if cache.len() >= self.max_entries && !cache.contains_key(&key) {
            // Simple eviction: clear all
            cache.clear();
        }
        cache.insert(key, table);
    }

    /// Return the table for `size`, computing and storing it on a miss.
    pub fn get_or_compute(&self, size: usize, direction: Direction) -> Arc<[Complex]> {
        let key = TwiddleKey { size, direction };
        if let Some(table) = self.get(&key) {
            return table;
        }
        let table: Arc<[Complex]> = twiddle_table(size, direction).into();
        self.put(key, Arc::clone(&table));
        table
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for TwiddleCache {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Process-wide cache shared by the iterative transform.
pub fn global_cache() -> &'static TwiddleCache {
    static CACHE: OnceLock<TwiddleCache> = OnceLock::new();
    CACHE.get_or_init(TwiddleCache::default)
}
