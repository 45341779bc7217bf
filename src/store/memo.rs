//! Single-entry memoization keyed by a dependency value.
//!
//! [`Memo`] remembers the last `(key, value)` pair. Asking for a value under
//! an equal key returns the remembered value; any other key recomputes it.
//! This is purely a cost optimization: dropping the cache at any point never
//! changes what callers observe, only how often `compute` runs.

/// Hit and miss counters for a [`Memo`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// A cache holding the value computed for the most recent key.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    stats: MemoStats,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            stats: MemoStats::default(),
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, computing it only when `key` differs
    /// from the key of the cached entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_blog::store::Memo;
    ///
    /// let mut memo = Memo::new();
    /// let mut runs = 0;
    /// for _ in 0..3 {
    ///     memo.get_or_compute(("posts", 1), |_| { runs += 1; 42 });
    /// }
    /// assert_eq!(runs, 1);
    /// ```
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        if self.get(&key).is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            self.entry = None;
        }

        let (_, value) = self.entry.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// Returns the cached value if its key equals `key`, without computing.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entry
            .as_ref()
            .filter(|(cached, _)| cached == key)
            .map(|(_, value)| value)
    }
}

impl<K, V> Memo<K, V> {
    /// Returns the cached value regardless of its key.
    #[must_use]
    pub fn peek(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    /// Drops the cached entry; the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub const fn stats(&self) -> MemoStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_hit_the_cache() {
        let mut memo = Memo::new();
        let mut runs = 0;

        assert_eq!(*memo.get_or_compute(1, |k| { runs += 1; k * 10 }), 10);
        assert_eq!(*memo.get_or_compute(1, |k| { runs += 1; k * 10 }), 10);

        assert_eq!(runs, 1);
        assert_eq!(memo.stats(), MemoStats { hits: 1, misses: 1 });
    }

    #[test]
    fn changed_key_recomputes_and_replaces() {
        let mut memo = Memo::new();
        memo.get_or_compute("a".to_string(), |k| k.len());
        assert_eq!(*memo.get_or_compute("abc".to_string(), |k| k.len()), 3);
        assert!(memo.get(&"a".to_string()).is_none());
        assert_eq!(memo.get(&"abc".to_string()), Some(&3));
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut memo = Memo::new();
        memo.get_or_compute((), |_| 1);
        memo.invalidate();
        assert!(memo.peek().is_none());
        assert_eq!(*memo.get_or_compute((), |_| 2), 2);
        assert_eq!(memo.stats().misses, 2);
    }

    #[test]
    fn switching_back_to_an_old_key_recomputes() {
        let mut memo = Memo::new();
        memo.get_or_compute(1, |_| "one");
        memo.get_or_compute(2, |_| "two");
        memo.get_or_compute(1, |_| "one again");
        assert_eq!(memo.peek(), Some(&"one again"));
        assert_eq!(memo.stats().hits, 0);
    }
}
