// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget measurement cache.

/// Counter identifying which font a measurement was taken with.
///
/// Owners bump it whenever the active font changes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontGeneration(pub u64);

impl FontGeneration {
    /// The following generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Inputs, other than the text itself, that a cached measurement depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CacheStamp {
    /// Font used for the measurement.
    pub font: FontGeneration,
    /// Wrap width the measurement was taken at (`0.0` for unwrapped text).
    pub wrap_width: f64,
    /// Font-unit to UI-unit scale (`1.0` for unscaled measurements).
    pub scale: f64,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    stamp: CacheStamp,
    value: T,
}

/// A cached text measurement.
///
/// The entry is reused while its [`CacheStamp`] matches. Text edits must
/// call [`TextLayoutCache::invalidate`].
#[derive(Clone, Debug)]
pub struct TextLayoutCache<T> {
    entry: Option<Entry<T>>,
}

impl<T> Default for TextLayoutCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TextLayoutCache<T> {
    /// An empty cache.
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Whether a measurement taken under `stamp` is present.
    pub fn is_valid_for(&self, stamp: CacheStamp) -> bool {
        self.entry.as_ref().is_some_and(|e| e.stamp == stamp)
    }

    /// The measurement for `stamp`, computing it with `measure` if stale.
    pub fn get_or_measure(&mut self, stamp: CacheStamp, measure: impl FnOnce() -> T) -> &T {
        if !self.is_valid_for(stamp) {
            self.entry = Some(Entry {
                stamp,
                value: measure(),
            });
        }
        let Some(entry) = &self.entry else {
            unreachable!("cache entry was just populated")
        };
        &entry.value
    }

    /// The last measurement taken, whatever it was stamped with.
    pub fn last(&self) -> Option<&T> {
        self.entry.as_ref().map(|e| &e.value)
    }

    /// Drop the cached measurement.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remeasures_only_when_stamp_changes() {
        let mut cache = TextLayoutCache::new();
        let stamp = CacheStamp {
            font: FontGeneration(1),
            wrap_width: 100.0,
            scale: 1.0,
        };
        let mut calls = 0;
        cache.get_or_measure(stamp, || {
            calls += 1;
            5
        });
        cache.get_or_measure(stamp, || {
            calls += 1;
            6
        });
        assert_eq!(calls, 1);
        assert_eq!(cache.last(), Some(&5));

        let wider = CacheStamp {
            wrap_width: 120.0,
            ..stamp
        };
        assert_eq!(*cache.get_or_measure(wider, || 7), 7);

        let new_font = CacheStamp {
            font: FontGeneration(1).next(),
            ..wider
        };
        assert!(!cache.is_valid_for(new_font));

        let smaller = CacheStamp {
            scale: 0.5,
            ..wider
        };
        assert!(!cache.is_valid_for(smaller));
    }

    #[test]
    fn invalidate_forces_remeasure() {
        let mut cache = TextLayoutCache::new();
        let stamp = CacheStamp {
            font: FontGeneration::default(),
            wrap_width: 0.0,
            scale: 1.0,
        };
        cache.get_or_measure(stamp, || 1);
        cache.invalidate();
        assert!(cache.last().is_none());
        assert_eq!(*cache.get_or_measure(stamp, || 2), 2);
    }
}
